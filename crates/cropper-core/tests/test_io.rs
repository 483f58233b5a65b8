mod common;

use tempfile::TempDir;

use cropper_core::bitmap::Bitmap;
use cropper_core::io::{load_bitmap, save_bitmap};
use cropper_core::pick::{ImagePicker, PathPicker, PickOutcome};

use common::coordinate_bitmap;

/// Bitmap with values that survive 8-bit quantization exactly.
fn quantized_bitmap(width: u32, height: u32) -> Bitmap {
    Bitmap::from_fn(width, height, |x, y| {
        [
            ((x * 17) % 256) as f32 / 255.0,
            ((y * 29) % 256) as f32 / 255.0,
            128.0 / 255.0,
            1.0,
        ]
    })
}

#[test]
fn test_png_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.png");
    let bitmap = quantized_bitmap(9, 5);

    save_bitmap(&bitmap, &path).unwrap();
    let loaded = load_bitmap(&path).unwrap();

    assert_eq!((loaded.width(), loaded.height()), (9, 5));
    assert_eq!(loaded.to_rgba8(), bitmap.to_rgba8());
}

#[test]
fn test_unknown_extension_falls_back_to_png() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.bin");
    save_bitmap(&quantized_bitmap(3, 3), &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[1..4], b"PNG");
}

#[test]
fn test_jpeg_save_drops_alpha() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.jpg");
    save_bitmap(&coordinate_bitmap(16, 16), &path).unwrap();

    let loaded = load_bitmap(&path).unwrap();
    assert_eq!((loaded.width(), loaded.height()), (16, 16));
    assert_eq!(loaded.pixel(0, 0)[3], 1.0);
}

#[test]
fn test_rgba8_conversion_rounds() {
    let bitmap = Bitmap::from_fn(1, 1, |_, _| [1.2, -0.1, 0.5, 1.0]);
    let px = bitmap.to_rgba8().get_pixel(0, 0).0;
    assert_eq!(px, [255, 0, 128, 255]);
}

// ---------------------------------------------------------------------------
// Picking
// ---------------------------------------------------------------------------

#[test]
fn test_pick_without_path_is_cancelled() {
    assert!(matches!(PickOutcome::from_path(None), PickOutcome::Cancelled));
}

#[test]
fn test_pick_unreadable_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("not-an-image.png");
    std::fs::write(&path, b"definitely not a png").unwrap();

    match PickOutcome::from_path(Some(&path)) {
        PickOutcome::Failed(reason) => assert!(reason.contains("not-an-image.png")),
        other => panic!("expected failure, got {other:?}"),
    }
}

#[test]
fn test_path_picker_loads_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pick.png");
    save_bitmap(&quantized_bitmap(6, 4), &path).unwrap();

    match PathPicker::new(&path).pick() {
        PickOutcome::Picked(bitmap) => assert_eq!((bitmap.width(), bitmap.height()), (6, 4)),
        other => panic!("expected picked image, got {other:?}"),
    }
}
