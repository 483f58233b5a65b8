use tracing::debug;

use crate::consts::COVER_EPSILON;
use crate::error::{CropperError, Result};
use crate::geometry::{remap, Vec2, Viewport};

/// Displayed size of the image at zoom 0 and zoom 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleRange {
    pub base_size: Vec2,
    pub max_size: Vec2,
}

/// Where the image sits relative to the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Image centre in UI coordinates.
    pub position: Vec2,
    /// Displayed width/height.
    pub size: Vec2,
}

impl Placement {
    pub fn min(&self) -> Vec2 {
        self.position - self.size / 2.0
    }

    pub fn max(&self) -> Vec2 {
        self.position + self.size / 2.0
    }
}

/// Owns the image's position and displayed size inside a fixed viewport.
///
/// Every position write goes through [`TransformController::clamp_position`],
/// so the image never exposes a gap inside the viewport.
#[derive(Clone, Debug)]
pub struct TransformController {
    viewport: Viewport,
    max_zoom_factor: f64,
    placement: Placement,
    scale_range: ScaleRange,
    drag_offset: Vec2,
}

impl TransformController {
    pub fn new(viewport: Viewport, max_zoom_factor: f64) -> Self {
        let size = viewport.size();
        Self {
            viewport,
            max_zoom_factor,
            placement: Placement {
                position: (viewport.min() + viewport.max()) / 2.0,
                size,
            },
            scale_range: ScaleRange {
                base_size: size,
                max_size: size * max_zoom_factor,
            },
            drag_offset: Vec2::ZERO,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn scale_range(&self) -> ScaleRange {
        self.scale_range
    }

    pub fn max_zoom_factor(&self) -> f64 {
        self.max_zoom_factor
    }

    /// Clamp a candidate image position so the image keeps covering the viewport.
    pub fn clamp_position(&self, candidate: Vec2) -> Vec2 {
        let min_rect = self.viewport.min();
        let max_rect = self.viewport.max();
        let half = self.placement.size / 2.0;

        let lowest = max_rect - half;
        let highest = min_rect + half;
        candidate.clamp(lowest, highest)
    }

    /// Set the displayed size from a slider value in [0, 1].
    ///
    /// Out-of-range values are clamped; non-finite values are ignored.
    pub fn apply_zoom(&mut self, zoom_level: f64) {
        if !zoom_level.is_finite() {
            return;
        }
        let t = zoom_level.clamp(0.0, 1.0);
        let ScaleRange {
            base_size,
            max_size,
        } = self.scale_range;

        self.placement.size = Vec2::new(
            remap(t, 0.0, 1.0, base_size.x, max_size.x),
            remap(t, 0.0, 1.0, base_size.y, max_size.y),
        );
        self.placement.position = self.clamp_position(self.placement.position);
        debug!(zoom = t, w = self.placement.size.x, h = self.placement.size.y, "zoom applied");
    }

    pub fn begin_drag(&mut self, pointer: Vec2) {
        self.drag_offset = self.placement.position - pointer;
    }

    pub fn continue_drag(&mut self, pointer: Vec2) {
        self.placement.position = self.clamp_position(pointer + self.drag_offset);
        // Re-anchor: clamping may have discarded part of the motion.
        self.drag_offset = self.placement.position - pointer;
    }

    /// Recompute the scale range for a freshly loaded image and reset placement.
    pub fn on_image_loaded(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(CropperError::InvalidImageDimensions { width, height });
        }

        let base_size = base_size_for(width, height, &self.viewport);
        self.scale_range = ScaleRange {
            base_size,
            max_size: base_size * self.max_zoom_factor,
        };

        self.placement.position = Vec2::ZERO;
        self.placement.size = base_size;
        self.placement.position = self.clamp_position(self.placement.position);
        self.drag_offset = Vec2::ZERO;

        debug!(
            width,
            height,
            base_w = base_size.x,
            base_h = base_size.y,
            "scale range computed"
        );
        Ok(())
    }

    /// Whether the displayed image fully covers the viewport.
    pub fn covers_viewport(&self) -> bool {
        let (img_min, img_max) = (self.placement.min(), self.placement.max());
        let (vp_min, vp_max) = (self.viewport.min(), self.viewport.max());
        img_min.x <= vp_min.x + COVER_EPSILON
            && img_min.y <= vp_min.y + COVER_EPSILON
            && img_max.x >= vp_max.x - COVER_EPSILON
            && img_max.y >= vp_max.y - COVER_EPSILON
    }
}

/// Displayed size at zoom 0: fit the shorter image axis to the viewport.
///
/// For viewports that are not square the short-axis fit can fall short on
/// the other axis; the size is then scaled up uniformly until it covers.
fn base_size_for(width: u32, height: u32, viewport: &Viewport) -> Vec2 {
    let (w, h) = (width as f64, height as f64);
    let vp = viewport.size();

    let size = if h > w {
        let rate = h / w;
        Vec2::new(vp.x, vp.x * rate)
    } else if w > h {
        let rate = w / h;
        Vec2::new(vp.y * rate, vp.y)
    } else {
        vp
    };

    let cover = (vp.x / size.x).max(vp.y / size.y);
    if cover > 1.0 {
        size * cover
    } else {
        size
    }
}
