use tracing::{info, warn};

use crate::bitmap::Bitmap;
use crate::config::CropperConfig;
use crate::crop::crop;
use crate::error::{CropperError, Result};
use crate::geometry::{Vec2, Viewport};
use crate::interaction::{Interaction, InteractionState, PointerEvent, PointerId};
use crate::pick::PickOutcome;
use crate::resize::{create_resizer, Resizer};
use crate::transform::{Placement, ScaleRange, TransformController};

/// One crop session: a source image placed in a fixed viewport.
///
/// All mutation happens on the caller's thread; crop results are fresh
/// bitmaps the caller may keep independently of later crops.
pub struct ImageCropper {
    source: Option<Bitmap>,
    controller: TransformController,
    interaction: Interaction,
    resizer: Box<dyn Resizer>,
    cropped: Option<Bitmap>,
}

impl ImageCropper {
    pub fn new(config: &CropperConfig) -> Result<Self> {
        let viewport = config.viewport.to_viewport()?;
        let factor = config.zoom.max_zoom_factor;
        if !factor.is_finite() || factor < 1.0 {
            return Err(CropperError::Config(format!(
                "max_zoom_factor must be >= 1.0, got {factor}"
            )));
        }
        Ok(Self::with_resizer(
            viewport,
            factor,
            create_resizer(&config.resize),
        ))
    }

    /// Build with an explicit resizer backend.
    pub fn with_resizer(viewport: Viewport, max_zoom_factor: f64, resizer: Box<dyn Resizer>) -> Self {
        Self {
            source: None,
            controller: TransformController::new(viewport, max_zoom_factor),
            interaction: Interaction::new(),
            resizer,
            cropped: None,
        }
    }

    /// Replace the source image and reset placement to zoom 0.
    ///
    /// A zero-sized bitmap is rejected and the previous image stays loaded.
    pub fn set_source_image(&mut self, bitmap: Bitmap) -> Result<()> {
        self.controller
            .on_image_loaded(bitmap.width(), bitmap.height())?;
        info!(
            width = bitmap.width(),
            height = bitmap.height(),
            "source image loaded"
        );
        self.source = Some(bitmap);
        self.interaction.reset();
        self.cropped = None;
        Ok(())
    }

    /// Apply the result of an image picker.
    pub fn handle_pick(&mut self, outcome: PickOutcome) -> Result<()> {
        match outcome {
            PickOutcome::Picked(bitmap) => self.set_source_image(bitmap),
            PickOutcome::Cancelled => {
                warn!("image pick cancelled");
                Err(CropperError::PickCancelled)
            }
            PickOutcome::Failed(reason) => {
                warn!(%reason, "image pick failed");
                Err(CropperError::PickFailed(reason))
            }
        }
    }

    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    pub fn source_image(&self) -> Option<&Bitmap> {
        self.source.as_ref()
    }

    /// Slider input in [0, 1]. Ignored while no image is loaded.
    pub fn apply_zoom(&mut self, zoom_level: f64) {
        if self.source.is_some() {
            self.controller.apply_zoom(zoom_level);
        }
    }

    pub fn pointer_down(&mut self, pos: Vec2) -> bool {
        self.handle_pointer(PointerEvent::Down {
            id: PointerId::PRIMARY,
            pos,
        })
    }

    pub fn pointer_move(&mut self, pos: Vec2) -> bool {
        self.handle_pointer(PointerEvent::Move {
            id: PointerId::PRIMARY,
            pos,
        })
    }

    pub fn pointer_up(&mut self) -> bool {
        self.handle_pointer(PointerEvent::Up {
            id: PointerId::PRIMARY,
        })
    }

    /// Feed a pointer event. Returns `true` if the image moved.
    ///
    /// Presses are ignored while no image is loaded; releases always go through
    /// so the pointer bookkeeping stays balanced.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        if self.source.is_none() && !matches!(event, PointerEvent::Up { .. }) {
            return false;
        }
        self.interaction.handle(event, &mut self.controller)
    }

    /// Crop the visible region. The result is also kept as the latest output.
    pub fn crop(&mut self) -> Result<Bitmap> {
        let cropped = crop(self.source.as_ref(), &self.controller, self.resizer.as_ref())?;
        self.cropped = Some(cropped.clone());
        Ok(cropped)
    }

    /// Latest successful crop, if any.
    pub fn cropped_image(&self) -> Option<&Bitmap> {
        self.cropped.as_ref()
    }

    pub fn controller(&self) -> &TransformController {
        &self.controller
    }

    pub fn placement(&self) -> Placement {
        self.controller.placement()
    }

    pub fn scale_range(&self) -> ScaleRange {
        self.controller.scale_range()
    }

    pub fn viewport(&self) -> &Viewport {
        self.controller.viewport()
    }

    pub fn interaction_state(&self) -> InteractionState {
        self.interaction.state()
    }

    pub fn is_dragging(&self) -> bool {
        self.interaction.is_dragging()
    }

    pub fn resizer_name(&self) -> &str {
        self.resizer.name()
    }
}
