use image::{DynamicImage, RgbaImage};
use ndarray::{s, Array3};

use crate::consts::CHANNEL_COUNT;

/// An RGBA bitmap.
/// Channel values are f32 in [0.0, 1.0].
#[derive(Clone, Debug, PartialEq)]
pub struct Bitmap {
    /// Pixel data, row-major, shape = (height, width, 4). Row 0 is the top row.
    pub data: Array3<f32>,
}

impl Bitmap {
    /// Fully transparent bitmap.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: Array3::zeros((height as usize, width as usize, CHANNEL_COUNT)),
        }
    }

    /// Build a bitmap from a per-pixel function of `(x, y)`.
    pub fn from_fn(width: u32, height: u32, f: impl Fn(u32, u32) -> [f32; CHANNEL_COUNT]) -> Self {
        let mut bitmap = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                bitmap.put_pixel(x, y, f(x, y));
            }
        }
        bitmap
    }

    pub fn width(&self) -> u32 {
        self.data.dim().1 as u32
    }

    pub fn height(&self) -> u32 {
        self.data.dim().0 as u32
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    pub fn pixel(&self, x: u32, y: u32) -> [f32; CHANNEL_COUNT] {
        let (row, col) = (y as usize, x as usize);
        [
            self.data[[row, col, 0]],
            self.data[[row, col, 1]],
            self.data[[row, col, 2]],
            self.data[[row, col, 3]],
        ]
    }

    pub fn put_pixel(&mut self, x: u32, y: u32, px: [f32; CHANNEL_COUNT]) {
        let (row, col) = (y as usize, x as usize);
        for (c, v) in px.into_iter().enumerate() {
            self.data[[row, col, c]] = v;
        }
    }

    /// Copy a `width x height` block whose top-left corner is `(x, y)`.
    ///
    /// The origin may be negative and the block may extend past the edges;
    /// only the overlap with this bitmap is read; everything else is
    /// transparent black.
    pub fn extract(&self, x: i64, y: i64, width: u32, height: u32) -> Bitmap {
        let mut out = Bitmap::new(width, height);
        if width == 0 || height == 0 {
            return out;
        }

        let src_w = self.width() as i64;
        let src_h = self.height() as i64;

        let x0 = x.clamp(0, src_w);
        let y0 = y.clamp(0, src_h);
        let x1 = (x + width as i64).clamp(0, src_w);
        let y1 = (y + height as i64).clamp(0, src_h);

        if x0 >= x1 || y0 >= y1 {
            return out;
        }

        let dst_x = (x0 - x) as usize;
        let dst_y = (y0 - y) as usize;
        let w = (x1 - x0) as usize;
        let h = (y1 - y0) as usize;

        out.data
            .slice_mut(s![dst_y..dst_y + h, dst_x..dst_x + w, ..])
            .assign(&self.data.slice(s![y0 as usize..y1 as usize, x0 as usize..x1 as usize, ..]));
        out
    }

    pub fn from_rgba8(img: &RgbaImage) -> Self {
        let (w, h) = img.dimensions();
        let mut data = Array3::<f32>::zeros((h as usize, w as usize, CHANNEL_COUNT));

        for (col, row, pixel) in img.enumerate_pixels() {
            for c in 0..CHANNEL_COUNT {
                data[[row as usize, col as usize, c]] = pixel.0[c] as f32 / 255.0;
            }
        }

        Self { data }
    }

    pub fn from_dynamic(img: &DynamicImage) -> Self {
        Self::from_rgba8(&img.to_rgba8())
    }

    /// Quantize to 8-bit RGBA.
    pub fn to_rgba8(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width(), self.height(), |x, y| {
            let px = self.pixel(x, y);
            image::Rgba(px.map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8))
        })
    }
}

impl From<DynamicImage> for Bitmap {
    fn from(img: DynamicImage) -> Self {
        Self::from_dynamic(&img)
    }
}
