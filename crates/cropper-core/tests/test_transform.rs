mod common;

use approx::assert_abs_diff_eq;

use cropper_core::error::CropperError;
use cropper_core::geometry::{Vec2, Viewport};
use cropper_core::transform::TransformController;

use common::{controller, wobble};

// ---------------------------------------------------------------------------
// on_image_loaded
// ---------------------------------------------------------------------------

#[test]
fn test_wide_image_fits_height() {
    let mut c = controller(200, 200);
    c.on_image_loaded(400, 100).unwrap();

    let range = c.scale_range();
    assert_eq!(range.base_size, Vec2::new(800.0, 200.0));
    assert_eq!(range.max_size, Vec2::new(2400.0, 600.0));
    assert_eq!(c.placement().size, range.base_size);
    assert_eq!(c.placement().position, Vec2::ZERO);
}

#[test]
fn test_tall_image_fits_width() {
    let mut c = controller(200, 200);
    c.on_image_loaded(100, 400).unwrap();

    let range = c.scale_range();
    assert_eq!(range.base_size, Vec2::new(200.0, 800.0));
    assert_eq!(range.max_size, Vec2::new(600.0, 2400.0));
}

#[test]
fn test_square_image_matches_viewport() {
    let mut c = controller(300, 300);
    c.on_image_loaded(64, 64).unwrap();
    assert_eq!(c.scale_range().base_size, Vec2::new(300.0, 300.0));
    assert_eq!(c.placement().position, Vec2::ZERO);
}

#[test]
fn test_non_square_viewport_scales_up_to_cover() {
    // Fitting the short image axis alone would leave 150x100 in a 400x100 window.
    let mut c = controller(400, 100);
    c.on_image_loaded(150, 100).unwrap();
    let base = c.scale_range().base_size;
    assert_abs_diff_eq!(base.x, 400.0, epsilon = 1e-9);
    assert_abs_diff_eq!(base.y, 400.0 / 1.5, epsilon = 1e-9);
    assert!(c.covers_viewport());

    // Same for a tall window and a tall image.
    let mut c = controller(100, 400);
    c.on_image_loaded(100, 150).unwrap();
    let base = c.scale_range().base_size;
    assert_abs_diff_eq!(base.x, 400.0 / 1.5, epsilon = 1e-9);
    assert_abs_diff_eq!(base.y, 400.0, epsilon = 1e-9);
    assert!(c.covers_viewport());

    // A square image takes the window's size as is.
    let mut c = controller(400, 100);
    c.on_image_loaded(50, 50).unwrap();
    assert_eq!(c.scale_range().base_size, Vec2::new(400.0, 100.0));
    assert!(c.covers_viewport());
}

#[test]
fn test_non_square_viewport_keeps_short_axis_fit_when_it_covers() {
    let mut c = controller(400, 100);
    c.on_image_loaded(800, 100).unwrap();
    assert_eq!(c.scale_range().base_size, Vec2::new(800.0, 100.0));
    assert_eq!(c.scale_range().max_size, Vec2::new(2400.0, 300.0));
}

#[test]
fn test_zero_sized_image_rejected_without_mutation() {
    let mut c = controller(200, 200);
    c.on_image_loaded(400, 100).unwrap();
    c.apply_zoom(0.5);
    let before = c.placement();
    let range_before = c.scale_range();

    let err = c.on_image_loaded(0, 100).unwrap_err();
    assert!(matches!(
        err,
        CropperError::InvalidImageDimensions { width: 0, height: 100 }
    ));
    assert_eq!(c.placement(), before);
    assert_eq!(c.scale_range(), range_before);
}

#[test]
fn test_load_clamps_initial_position_for_offset_pivot() {
    let viewport = Viewport::new(Vec2::new(50.0, 50.0), 200, 200).with_pivot(Vec2::ZERO);
    let mut c = TransformController::new(viewport, 3.0);
    c.on_image_loaded(400, 100).unwrap();

    // (0, 0) would leave the viewport's lower half uncovered.
    assert_eq!(c.placement().position, Vec2::new(0.0, 150.0));
    assert!(c.covers_viewport());
}

#[test]
fn test_load_resets_previous_zoom_and_pan() {
    let mut c = controller(200, 200);
    c.on_image_loaded(400, 100).unwrap();
    c.apply_zoom(1.0);
    c.begin_drag(Vec2::ZERO);
    c.continue_drag(Vec2::new(500.0, 100.0));

    c.on_image_loaded(400, 100).unwrap();
    assert_eq!(c.placement().size, Vec2::new(800.0, 200.0));
    assert_eq!(c.placement().position, Vec2::ZERO);
}

// ---------------------------------------------------------------------------
// apply_zoom
// ---------------------------------------------------------------------------

#[test]
fn test_zoom_monotonic_and_bounded() {
    let mut c = controller(200, 200);
    c.on_image_loaded(640, 480).unwrap();
    let range = c.scale_range();

    let mut prev = Vec2::ZERO;
    for step in 0..=50 {
        let z = step as f64 / 50.0;
        c.apply_zoom(z);
        let size = c.placement().size;

        assert!(size.x >= range.base_size.x && size.x <= range.max_size.x + 1e-9);
        assert!(size.y >= range.base_size.y && size.y <= range.max_size.y + 1e-9);
        assert!(size.x >= prev.x && size.y >= prev.y, "shrank at zoom {z}");
        prev = size;
    }
}

#[test]
fn test_zoom_round_trip_has_no_drift() {
    let mut c = controller(200, 200);
    c.on_image_loaded(400, 100).unwrap();
    let base = c.scale_range().base_size;

    c.apply_zoom(0.0);
    c.apply_zoom(1.0);
    assert_abs_diff_eq!(c.placement().size.x, 2400.0, epsilon = 1e-9);
    assert_abs_diff_eq!(c.placement().size.y, 600.0, epsilon = 1e-9);
    c.apply_zoom(0.0);
    assert_eq!(c.placement().size, base);
}

#[test]
fn test_zoom_out_of_range_is_clamped() {
    let mut c = controller(200, 200);
    c.on_image_loaded(400, 100).unwrap();

    c.apply_zoom(2.5);
    assert_abs_diff_eq!(c.placement().size.x, 2400.0, epsilon = 1e-9);

    c.apply_zoom(-1.0);
    assert_eq!(c.placement().size, c.scale_range().base_size);
}

#[test]
fn test_zoom_nan_is_ignored() {
    let mut c = controller(200, 200);
    c.on_image_loaded(400, 100).unwrap();
    c.apply_zoom(0.25);
    let before = c.placement();

    c.apply_zoom(f64::NAN);
    assert_eq!(c.placement(), before);
}

#[test]
fn test_zoom_out_reclamps_position() {
    let mut c = controller(200, 200);
    c.on_image_loaded(400, 100).unwrap();
    c.apply_zoom(1.0);

    // Push to the far corner of the 2400x600 image's legal range.
    c.begin_drag(Vec2::ZERO);
    c.continue_drag(Vec2::new(5000.0, 5000.0));
    assert_eq!(c.placement().position, Vec2::new(1100.0, 200.0));

    c.apply_zoom(0.0);
    assert_eq!(c.placement().position, Vec2::new(300.0, 0.0));
    assert!(c.covers_viewport());
}

// ---------------------------------------------------------------------------
// clamp_position
// ---------------------------------------------------------------------------

#[test]
fn test_clamp_is_idempotent() {
    let mut c = controller(320, 180);
    c.on_image_loaded(1000, 700).unwrap();

    for (i, z) in [0.0, 0.3, 0.77, 1.0].into_iter().enumerate() {
        c.apply_zoom(z);
        let xs = wobble(11 + i as u64, 64, 5000.0);
        let ys = wobble(97 + i as u64, 64, 5000.0);
        for (x, y) in xs.into_iter().zip(ys) {
            let once = c.clamp_position(Vec2::new(x, y));
            let twice = c.clamp_position(once);
            assert_eq!(once, twice);
        }
    }
}

#[test]
fn test_clamp_leaves_legal_positions_alone() {
    let mut c = controller(200, 200);
    c.on_image_loaded(400, 100).unwrap();
    let p = Vec2::new(-123.5, 0.0);
    assert_eq!(c.clamp_position(p), p);
}

#[test]
fn test_clamp_bounds_each_axis_independently() {
    let mut c = controller(200, 200);
    c.on_image_loaded(400, 100).unwrap();
    c.apply_zoom(0.5);
    // size (1600, 400): x in [-700, 700], y in [-100, 100]
    assert_eq!(
        c.clamp_position(Vec2::new(-900.0, 50.0)),
        Vec2::new(-700.0, 50.0)
    );
    assert_eq!(
        c.clamp_position(Vec2::new(10.0, 900.0)),
        Vec2::new(10.0, 100.0)
    );
}

// ---------------------------------------------------------------------------
// Dragging
// ---------------------------------------------------------------------------

#[test]
fn test_drag_is_rigid() {
    let mut c = controller(200, 200);
    c.on_image_loaded(400, 100).unwrap();

    c.begin_drag(Vec2::new(10.0, 10.0));
    c.continue_drag(Vec2::new(30.0, 10.0));
    assert_eq!(c.placement().position, Vec2::new(20.0, 0.0));

    c.continue_drag(Vec2::new(-15.0, 10.0));
    assert_eq!(c.placement().position, Vec2::new(-25.0, 0.0));
}

#[test]
fn test_drag_reanchors_after_clamp() {
    let mut c = controller(200, 200);
    c.on_image_loaded(400, 100).unwrap();

    c.begin_drag(Vec2::new(10.0, 10.0));
    c.continue_drag(Vec2::new(1000.0, 10.0));
    assert_eq!(c.placement().position, Vec2::new(300.0, 0.0));

    // Moving back responds immediately; the discarded overshoot is forgotten.
    c.continue_drag(Vec2::new(990.0, 10.0));
    assert_eq!(c.placement().position, Vec2::new(290.0, 0.0));
}

#[test]
fn test_drag_never_changes_size() {
    let mut c = controller(200, 200);
    c.on_image_loaded(400, 300).unwrap();
    c.apply_zoom(0.6);
    let size = c.placement().size;

    c.begin_drag(Vec2::ZERO);
    for (x, y) in wobble(3, 40, 800.0).into_iter().zip(wobble(4, 40, 800.0)) {
        c.continue_drag(Vec2::new(x, y));
        assert_eq!(c.placement().size, size);
    }
}

#[test]
fn test_drag_sequence_always_covers_viewport() {
    for (seed, (w, h)) in [(1u64, (400u32, 100u32)), (2, (90, 300)), (3, (512, 512))] {
        let mut c = controller(240, 160);
        c.on_image_loaded(w, h).unwrap();
        c.apply_zoom(0.37);

        c.begin_drag(Vec2::ZERO);
        let xs = wobble(seed, 200, 2000.0);
        let ys = wobble(seed + 100, 200, 2000.0);
        for (x, y) in xs.into_iter().zip(ys) {
            c.continue_drag(Vec2::new(x, y));
            assert!(c.covers_viewport(), "gap after drag to ({x}, {y}) for {w}x{h}");
        }
    }
}
