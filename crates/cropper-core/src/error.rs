use thiserror::Error;

#[derive(Error, Debug)]
pub enum CropperError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("No source image loaded")]
    NoSourceImage,

    #[error("Invalid resize dimensions: {width}x{height}")]
    InvalidResizeDimensions { width: u32, height: u32 },

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidImageDimensions { width: u32, height: u32 },

    #[error("Invalid viewport: {0}")]
    InvalidViewport(String),

    #[error("Image pick failed: {0}")]
    PickFailed(String),

    #[error("Image pick cancelled")]
    PickCancelled,

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CropperError>;
