use std::path::Path;

use image::{DynamicImage, ImageFormat};

use crate::bitmap::Bitmap;
use crate::error::Result;

/// Decode any format the `image` crate understands into a bitmap.
pub fn load_bitmap(path: &Path) -> Result<Bitmap> {
    let img = image::open(path)?;
    Ok(Bitmap::from_dynamic(&img))
}

/// Save a bitmap as 8-bit RGBA PNG.
pub fn save_png(bitmap: &Bitmap, path: &Path) -> Result<()> {
    bitmap.to_rgba8().save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save a bitmap as 8-bit RGB JPEG (alpha dropped).
pub fn save_jpeg(bitmap: &Bitmap, path: &Path) -> Result<()> {
    let rgb = DynamicImage::ImageRgba8(bitmap.to_rgba8()).to_rgb8();
    rgb.save_with_format(path, ImageFormat::Jpeg)?;
    Ok(())
}

/// Save bitmap, choosing format from file extension.
pub fn save_bitmap(bitmap: &Bitmap, path: &Path) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("jpg" | "jpeg") => save_jpeg(bitmap, path),
        _ => save_png(bitmap, path),
    }
}
