use tracing::{info, warn};

use crate::bitmap::Bitmap;
use crate::error::{CropperError, Result};
use crate::geometry::Vec2;
use crate::resize::Resizer;
use crate::transform::TransformController;

/// Block read from the on-screen-sized bitmap, in its pixel coordinates.
///
/// `x`/`y` may be negative or run past the edge when floating-point error
/// at the clamp boundary pushes the origin out by a fraction of a pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CropRegion {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

/// Viewport top-left corner in the displayed image's local pixel frame.
///
/// Moves the viewport corner into image space (the image has no rotation or
/// scale beyond its displayed size), then shifts by half the displayed size
/// so that (0, 0) is the image's top-left pixel.
pub fn crop_origin(controller: &TransformController) -> Vec2 {
    let placement = controller.placement();
    let local = controller.viewport().min() - placement.position;
    local + placement.size / 2.0
}

/// Integer read rectangle for the current transform.
///
/// Truncation toward zero happens only here, after both coordinate conversions.
pub fn crop_region(controller: &TransformController) -> CropRegion {
    let origin = crop_origin(controller);
    let viewport = controller.viewport();
    CropRegion {
        x: origin.x as i64,
        y: origin.y as i64,
        width: viewport.width,
        height: viewport.height,
    }
}

/// Pixel dimensions the source is resampled to before extraction.
pub fn display_dimensions(controller: &TransformController) -> (u32, u32) {
    let size = controller.placement().size;
    (size.x as u32, size.y as u32)
}

/// Extract the pixels visible through the viewport as a new bitmap.
///
/// The output is always exactly `viewport.width x viewport.height`; any part
/// of the read rectangle outside the resized source is transparent black.
/// Only the visible window is resampled, so the displayed size never has to
/// fit in memory.
pub fn crop(
    source: Option<&Bitmap>,
    controller: &TransformController,
    resizer: &dyn Resizer,
) -> Result<Bitmap> {
    let Some(source) = source else {
        warn!("Empty source image, nothing to crop");
        return Err(CropperError::NoSourceImage);
    };

    let (display_w, display_h) = display_dimensions(controller);
    let region = crop_region(controller);
    let cropped = resizer.resize_window(source, display_w, display_h, &region)?;

    info!(
        x = region.x,
        y = region.y,
        width = region.width,
        height = region.height,
        display_w,
        display_h,
        backend = resizer.name(),
        "cropped"
    );
    Ok(cropped)
}
