/// Minimum output pixel count (w*h) to use row-level Rayon parallelism when resizing.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Number of channels in a bitmap pixel (R, G, B, A).
pub const CHANNEL_COUNT: usize = 4;

/// `maxSize = baseSize * DEFAULT_MAX_ZOOM_FACTOR` unless configured otherwise.
pub const DEFAULT_MAX_ZOOM_FACTOR: f64 = 3.0;

/// Default crop window edge length in UI units (== output pixels).
pub const DEFAULT_VIEWPORT_SIZE: u32 = 512;

/// Tolerance (UI units) when checking that the image covers the viewport.
pub const COVER_EPSILON: f64 = 1e-6;
