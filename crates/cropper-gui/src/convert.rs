use cropper_core::bitmap::Bitmap;

/// Convert an RGBA Bitmap (Array3<f32> in [0.0, 1.0]) to an egui ColorImage.
pub fn bitmap_to_color_image(bitmap: &Bitmap) -> egui::ColorImage {
    let rgba = bitmap.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw())
}
