use ndarray::{Array3, ArrayViewMut2, Axis};
use rayon::prelude::*;
use tracing::debug;

use crate::bitmap::Bitmap;
use crate::consts::{CHANNEL_COUNT, PARALLEL_PIXEL_THRESHOLD};
use crate::crop::CropRegion;
use crate::error::{CropperError, Result};

use super::{validate_dimensions, Resizer};

/// CPU bilinear resizer using Rayon for large targets.
pub struct BilinearResizer {
    parallel_threshold: usize,
}

impl BilinearResizer {
    pub fn new() -> Self {
        Self::with_parallel_threshold(PARALLEL_PIXEL_THRESHOLD)
    }

    pub fn with_parallel_threshold(parallel_threshold: usize) -> Self {
        Self { parallel_threshold }
    }
}

impl Default for BilinearResizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Resizer for BilinearResizer {
    fn name(&self) -> &str {
        "CPU/Bilinear"
    }

    fn resize(&self, image: &Bitmap, width: u32, height: u32) -> Result<Bitmap> {
        let full = CropRegion {
            x: 0,
            y: 0,
            width,
            height,
        };
        self.resize_window(image, width, height, &full)
    }

    fn resize_window(
        &self,
        image: &Bitmap,
        width: u32,
        height: u32,
        window: &CropRegion,
    ) -> Result<Bitmap> {
        validate_dimensions(width, height)?;
        if image.is_empty() {
            return Err(CropperError::InvalidImageDimensions {
                width: image.width(),
                height: image.height(),
            });
        }

        debug!(
            src_w = image.width(),
            src_h = image.height(),
            dst_w = width,
            dst_h = height,
            win_x = window.x,
            win_y = window.y,
            win_w = window.width,
            win_h = window.height,
            "resampling bitmap"
        );

        let mut out = Bitmap::new(window.width, window.height);
        let target = Target {
            width: width as usize,
            height: height as usize,
        };
        let pixels = window.width as usize * window.height as usize;
        if pixels >= self.parallel_threshold {
            resample_parallel(image, &mut out.data, target, window);
        } else {
            resample_sequential(image, &mut out.data, target, window);
        }
        Ok(out)
    }
}

// ---------------------------------------------------------------------------
// Bilinear interpolation
// ---------------------------------------------------------------------------

/// Sample `data` at fractional pixel coordinates, clamping to the edge texels.
///
/// An empty array samples as transparent black.
pub(crate) fn bilinear_sample(data: &Array3<f32>, y: f64, x: f64) -> [f32; CHANNEL_COUNT] {
    let (h, w, _) = data.dim();
    if w == 0 || h == 0 {
        return [0.0; CHANNEL_COUNT];
    }

    let x = x.clamp(0.0, (w - 1) as f64);
    let y = y.clamp(0.0, (h - 1) as f64);

    let x0 = x.floor() as usize;
    let y0 = y.floor() as usize;
    let x1 = (x0 + 1).min(w - 1);
    let y1 = (y0 + 1).min(h - 1);

    let fx = (x - x0 as f64) as f32;
    let fy = (y - y0 as f64) as f32;

    let mut out = [0.0f32; CHANNEL_COUNT];
    for (c, v) in out.iter_mut().enumerate() {
        let v00 = data[[y0, x0, c]];
        let v10 = data[[y0, x1, c]];
        let v01 = data[[y1, x0, c]];
        let v11 = data[[y1, x1, c]];
        *v = v00 * (1.0 - fx) * (1.0 - fy)
            + v10 * fx * (1.0 - fy)
            + v01 * (1.0 - fx) * fy
            + v11 * fx * fy;
    }
    out
}

/// Full resampled size; the window is read out of this virtual bitmap.
#[derive(Clone, Copy)]
struct Target {
    width: usize,
    height: usize,
}

/// Source coordinate of the centre of destination texel `dst`.
fn source_coord(dst: usize, src_len: usize, dst_len: usize) -> f64 {
    (dst as f64 + 0.5) * src_len as f64 / dst_len as f64 - 0.5
}

/// Map a window offset onto a target texel index, if it lies inside the target.
fn target_index(origin: i64, offset: usize, len: usize) -> Option<usize> {
    let idx = origin.checked_add(offset as i64)?;
    usize::try_from(idx).ok().filter(|&i| i < len)
}

/// Fill one output row. Texels outside the target stay transparent.
fn resample_row(
    image: &Bitmap,
    mut row: ArrayViewMut2<f32>,
    out_row: usize,
    target: Target,
    window: &CropRegion,
) {
    let Some(ty) = target_index(window.y, out_row, target.height) else {
        return;
    };
    let src_w = image.width() as usize;
    let src_y = source_coord(ty, image.height() as usize, target.height);

    for (col, mut px) in row.outer_iter_mut().enumerate() {
        let Some(tx) = target_index(window.x, col, target.width) else {
            continue;
        };
        let src_x = source_coord(tx, src_w, target.width);
        let sample = bilinear_sample(&image.data, src_y, src_x);
        for (c, v) in sample.into_iter().enumerate() {
            px[c] = v;
        }
    }
}

fn resample_parallel(image: &Bitmap, out: &mut Array3<f32>, target: Target, window: &CropRegion) {
    out.axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(row_idx, row)| resample_row(image, row, row_idx, target, window));
}

fn resample_sequential(image: &Bitmap, out: &mut Array3<f32>, target: Target, window: &CropRegion) {
    for (row_idx, row) in out.axis_iter_mut(Axis(0)).enumerate() {
        resample_row(image, row, row_idx, target, window);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_coord_identity_is_exact() {
        for i in 0..16 {
            assert_eq!(source_coord(i, 16, 16), i as f64);
        }
    }

    #[test]
    fn source_coord_halving_lands_between_texels() {
        assert_eq!(source_coord(0, 4, 2), 0.5);
        assert_eq!(source_coord(1, 4, 2), 2.5);
    }

    #[test]
    fn bilinear_sample_empty_is_transparent() {
        let empty = Array3::<f32>::zeros((0, 0, CHANNEL_COUNT));
        assert_eq!(bilinear_sample(&empty, 0.0, 0.0), [0.0; CHANNEL_COUNT]);

        let no_columns = Array3::<f32>::zeros((3, 0, CHANNEL_COUNT));
        assert_eq!(bilinear_sample(&no_columns, 1.0, 0.0), [0.0; CHANNEL_COUNT]);
    }

    #[test]
    fn target_index_rejects_outside() {
        assert_eq!(target_index(-2, 1, 10), None);
        assert_eq!(target_index(-2, 2, 10), Some(0));
        assert_eq!(target_index(8, 1, 10), Some(9));
        assert_eq!(target_index(8, 2, 10), None);
    }
}
