use std::path::PathBuf;

use cropper_core::config::CropperConfig;
use cropper_core::pick::PickOutcome;

/// Results sent from dialog threads back to the UI thread.
pub enum AppMessage {
    /// An Open dialog finished. `path` is `None` when it was dismissed.
    ImagePicked {
        path: Option<PathBuf>,
        outcome: PickOutcome,
    },
    ConfigImported {
        path: PathBuf,
        config: CropperConfig,
    },
    CropSaved {
        path: PathBuf,
    },
    ConfigExported {
        path: PathBuf,
    },
    Error {
        message: String,
    },
}
