pub mod cpu;

use crate::bitmap::Bitmap;
use crate::config::ResizeConfig;
use crate::crop::CropRegion;
use crate::error::{CropperError, Result};

pub use cpu::BilinearResizer;

/// Rescales a bitmap to arbitrary pixel dimensions.
///
/// Implementations must return exactly `width x height` pixels, must not
/// touch the input, and must reject zero dimensions before allocating.
pub trait Resizer: Send + Sync {
    fn name(&self) -> &str;

    fn resize(&self, image: &Bitmap, width: u32, height: u32) -> Result<Bitmap>;

    /// Resample to `width x height` but produce only the pixels inside `window`.
    ///
    /// The result equals `resize(..).extract(window)` pixel for pixel: window
    /// texels outside the target are transparent black. Memory scales with
    /// the window, not with the target.
    fn resize_window(
        &self,
        image: &Bitmap,
        width: u32,
        height: u32,
        window: &CropRegion,
    ) -> Result<Bitmap>;
}

/// Reject zero-sized targets.
pub fn validate_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(CropperError::InvalidResizeDimensions { width, height });
    }
    Ok(())
}

/// Build the resizer described by `config`.
pub fn create_resizer(config: &ResizeConfig) -> Box<dyn Resizer> {
    Box::new(BilinearResizer::with_parallel_threshold(
        config.parallel_pixel_threshold,
    ))
}
