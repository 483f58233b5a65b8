#![allow(dead_code)]

use cropper_core::bitmap::Bitmap;
use cropper_core::config::{CropperConfig, ViewportConfig};
use cropper_core::cropper::ImageCropper;
use cropper_core::geometry::{Vec2, Viewport};
use cropper_core::transform::TransformController;

/// Bitmap whose red channel encodes the column and green encodes the row.
///
/// Values are `x / 1024` and `y / 1024`, so every pixel is distinct for
/// images up to 1024 pixels on a side and exact under identity resizing.
pub fn coordinate_bitmap(width: u32, height: u32) -> Bitmap {
    Bitmap::from_fn(width, height, |x, y| {
        [x as f32 / 1024.0, y as f32 / 1024.0, 0.5, 1.0]
    })
}

pub fn solid_bitmap(width: u32, height: u32, px: [f32; 4]) -> Bitmap {
    Bitmap::from_fn(width, height, |_, _| px)
}

/// Column index recovered from a `coordinate_bitmap` pixel.
pub fn column_of(px: [f32; 4]) -> u32 {
    (px[0] * 1024.0).round() as u32
}

/// Row index recovered from a `coordinate_bitmap` pixel.
pub fn row_of(px: [f32; 4]) -> u32 {
    (px[1] * 1024.0).round() as u32
}

pub fn square_viewport(size: u32) -> Viewport {
    Viewport::new(Vec2::ZERO, size, size)
}

pub fn controller(width: u32, height: u32) -> TransformController {
    TransformController::new(Viewport::new(Vec2::ZERO, width, height), 3.0)
}

pub fn cropper(width: u32, height: u32) -> ImageCropper {
    let config = CropperConfig {
        viewport: ViewportConfig {
            width,
            height,
            ..ViewportConfig::default()
        },
        ..CropperConfig::default()
    };
    ImageCropper::new(&config).expect("valid config")
}

/// Deterministic pseudo-random sequence in [-range, range].
pub fn wobble(seed: u64, count: usize, range: f64) -> Vec<f64> {
    let mut state = seed;
    (0..count)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let unit = (state >> 11) as f64 / (1u64 << 53) as f64;
            (unit * 2.0 - 1.0) * range
        })
        .collect()
}
