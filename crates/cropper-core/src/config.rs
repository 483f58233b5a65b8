use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_MAX_ZOOM_FACTOR, DEFAULT_VIEWPORT_SIZE, PARALLEL_PIXEL_THRESHOLD};
use crate::error::{CropperError, Result};
use crate::geometry::{Vec2, Viewport};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CropperConfig {
    #[serde(default)]
    pub viewport: ViewportConfig,
    #[serde(default)]
    pub zoom: ZoomConfig,
    #[serde(default)]
    pub resize: ResizeConfig,
}

impl CropperConfig {
    pub fn from_toml(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| CropperError::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CropperError::Config(e.to_string()))
    }
}

/// Crop window geometry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportConfig {
    /// Width in UI units; also the output width in pixels.
    pub width: u32,
    /// Height in UI units; also the output height in pixels.
    pub height: u32,
    /// Pivot position in UI coordinates.
    #[serde(default)]
    pub anchor: [f64; 2],
    /// Normalized pivot inside the rectangle, (0.5, 0.5) = centre.
    #[serde(default = "default_pivot")]
    pub pivot: [f64; 2],
}

fn default_pivot() -> [f64; 2] {
    [0.5, 0.5]
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_SIZE,
            height: DEFAULT_VIEWPORT_SIZE,
            anchor: [0.0, 0.0],
            pivot: default_pivot(),
        }
    }
}

impl ViewportConfig {
    /// Validate and build the viewport.
    pub fn to_viewport(&self) -> Result<Viewport> {
        if self.width == 0 || self.height == 0 {
            return Err(CropperError::InvalidViewport(format!(
                "size must be > 0, got {}x{}",
                self.width, self.height
            )));
        }
        let anchor = Vec2::from(self.anchor);
        let pivot = Vec2::from(self.pivot);
        if !anchor.is_finite() || !pivot.is_finite() {
            return Err(CropperError::InvalidViewport(
                "anchor and pivot must be finite".into(),
            ));
        }
        Ok(Viewport::new(anchor, self.width, self.height).with_pivot(pivot))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoomConfig {
    /// `maxSize = baseSize * max_zoom_factor`.
    pub max_zoom_factor: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            max_zoom_factor: DEFAULT_MAX_ZOOM_FACTOR,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResizeConfig {
    /// Output pixel count at which resizing switches to row-parallel.
    pub parallel_pixel_threshold: usize,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            parallel_pixel_threshold: PARALLEL_PIXEL_THRESHOLD,
        }
    }
}
