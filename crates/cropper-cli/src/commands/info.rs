use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use cropper_core::cropper::ImageCropper;
use cropper_core::pick::{ImagePicker, PathPicker};

use crate::summary::print_session_summary;

use super::{load_config, parse_size};

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,

    /// TOML config file (viewport, zoom, resize)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Viewport size as WIDTHxHEIGHT (overrides config)
    #[arg(long, value_parser = parse_size)]
    pub viewport: Option<(u32, u32)>,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some((w, h)) = args.viewport {
        config.viewport.width = w;
        config.viewport.height = h;
    }

    let mut session = ImageCropper::new(&config)?;
    session
        .handle_pick(PathPicker::new(&args.file).pick())
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    print_session_summary(&args.file, &session);
    Ok(())
}
