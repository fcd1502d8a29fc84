//! `chroma showcase`

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chroma_core::Palette;
use chroma_view::render_palette_showcase;

use crate::output;

pub fn load_palette(path: &Path) -> Result<Palette> {
    let raw = fs::read_to_string(path).with_context(|| format!("Reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("{} is not a saved palette", path.display()))
}

pub fn handle(palette_path: &Path, svg_path: &Path) -> Result<()> {
    let palette = load_palette(palette_path)?;
    fs::write(svg_path, render_palette_showcase(&palette))
        .with_context(|| format!("Writing showcase to {}", svg_path.display()))?;
    output::success(&format!(
        "Showcase for \"{}\" written to {}",
        palette.concept(),
        svg_path.display()
    ));
    Ok(())
}
