use std::path::{Path, PathBuf};

use tracing::warn;

use crate::bitmap::Bitmap;
use crate::io::load_bitmap;

/// Result delivered by an image picker.
#[derive(Clone, Debug)]
pub enum PickOutcome {
    Picked(Bitmap),
    Cancelled,
    Failed(String),
}

impl PickOutcome {
    /// Turn an optional picked path into an outcome by decoding the file.
    ///
    /// `None` means the user dismissed the picker.
    pub fn from_path(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::Cancelled;
        };
        match load_bitmap(path) {
            Ok(bitmap) => Self::Picked(bitmap),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load picked image");
                Self::Failed(format!("{}: {e}", path.display()))
            }
        }
    }
}

/// Source of user-chosen images (file dialog, gallery, fixed path).
///
/// May block; frontends that cannot block run it off the UI thread and
/// deliver the outcome back.
pub trait ImagePicker: Send {
    fn pick(&self) -> PickOutcome;
}

/// Picker that always yields one file.
pub struct PathPicker {
    path: PathBuf,
}

impl PathPicker {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ImagePicker for PathPicker {
    fn pick(&self) -> PickOutcome {
        PickOutcome::from_path(Some(&self.path))
    }
}
