use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use cropper_core::cropper::ImageCropper;
use cropper_core::geometry::Vec2;
use cropper_core::io::save_bitmap;
use cropper_core::pick::{ImagePicker, PathPicker};
use tracing::info;

use crate::summary::print_crop_result;

use super::{load_config, parse_offset, parse_size};

#[derive(Args)]
pub struct CropArgs {
    /// Input image file
    pub file: PathBuf,

    /// Output file (PNG unless the extension says JPEG; auto-generated if not provided)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// TOML config file (viewport, zoom, resize)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Viewport size as WIDTHxHEIGHT (overrides config)
    #[arg(long, value_parser = parse_size)]
    pub viewport: Option<(u32, u32)>,

    /// Zoom slider value in [0.0, 1.0]
    #[arg(short, long, default_value = "0.0")]
    pub zoom: f64,

    /// Drag the image by DX,DY viewport units after zooming (clamped to the viewport)
    #[arg(long, value_parser = parse_offset, allow_hyphen_values = true)]
    pub pan: Option<(f64, f64)>,
}

pub fn run(args: &CropArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some((w, h)) = args.viewport {
        config.viewport.width = w;
        config.viewport.height = h;
    }

    let mut session = ImageCropper::new(&config)?;
    session
        .handle_pick(PathPicker::new(&args.file).pick())
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    session.apply_zoom(args.zoom);

    if let Some((dx, dy)) = args.pan {
        drag_by(&mut session, Vec2::new(dx, dy));
    }

    let cropped = session.crop()?;

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| crop_output_path(&args.file, cropped.width(), cropped.height()));

    save_bitmap(&cropped, &output_path)
        .with_context(|| format!("Failed to save {}", output_path.display()))?;
    info!(path = %output_path.display(), "crop saved");

    print_crop_result(&session, &output_path);
    Ok(())
}

/// Simulate a single-pointer drag that starts at the viewport centre.
fn drag_by(session: &mut ImageCropper, delta: Vec2) {
    let viewport = session.viewport();
    let start = (viewport.min() + viewport.max()) / 2.0;

    session.pointer_down(start);
    session.pointer_move(start + delta);
    session.pointer_up();
}

fn crop_output_path(source: &Path, w: u32, h: u32) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let parent = source.parent().unwrap_or(Path::new("."));
    parent.join(format!("{stem}_crop{w}x{h}.png"))
}
