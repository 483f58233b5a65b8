pub mod config;
pub mod crop;
pub mod info;

use std::path::Path;

use anyhow::{bail, Context, Result};
use cropper_core::config::CropperConfig;

/// Load a TOML config file, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<CropperConfig> {
    let Some(path) = path else {
        return Ok(CropperConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    CropperConfig::from_toml(&text)
        .with_context(|| format!("Invalid config {}", path.display()))
}

/// Parse `WIDTHxHEIGHT`, e.g. `512x384`.
pub fn parse_size(s: &str) -> Result<(u32, u32)> {
    let Some((w, h)) = s.split_once(['x', 'X']) else {
        bail!("expected WIDTHxHEIGHT, got '{s}'");
    };
    let w: u32 = w.trim().parse().context("invalid width")?;
    let h: u32 = h.trim().parse().context("invalid height")?;
    if w == 0 || h == 0 {
        bail!("viewport size must be > 0");
    }
    Ok((w, h))
}

/// Parse `DX,DY`, e.g. `-40,12.5`.
pub fn parse_offset(s: &str) -> Result<(f64, f64)> {
    let Some((x, y)) = s.split_once(',') else {
        bail!("expected DX,DY, got '{s}'");
    };
    let x: f64 = x.trim().parse().context("invalid x offset")?;
    let y: f64 = y.trim().parse().context("invalid y offset")?;
    Ok((x, y))
}
