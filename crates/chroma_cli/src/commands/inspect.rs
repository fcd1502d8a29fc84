//! `chroma inspect`

use anyhow::{Context, Result};
use chroma_core::{contrast_color, hex_to_hsl, hex_to_rgb, Rgb};
use comfy_table::{Cell, Color};
use serde::Serialize;

use crate::output;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ColorReport {
    pub hex: String,
    pub rgb: String,
    pub hsl: String,
    pub contrast: &'static str,
}

pub fn report(hex: &str) -> Result<ColorReport> {
    let canonical = Rgb::from_hex(hex)
        .with_context(|| format!("'{hex}' is not a #RRGGBB color"))?
        .to_hex();
    Ok(ColorReport {
        rgb: hex_to_rgb(&canonical)?,
        hsl: hex_to_hsl(&canonical)?,
        contrast: contrast_color(&canonical)?,
        hex: canonical,
    })
}

pub fn handle(colors: &[String]) -> Result<()> {
    let reports = colors.iter().map(|c| report(c)).collect::<Result<Vec<_>>>()?;

    let mut table = output::table(&["", "Hex", "RGB", "HSL", "Label"]);
    for r in &reports {
        let (red, green, blue) = Rgb::from_hex(&r.hex)?.tuple();
        let (lr, lg, lb) = Rgb::from_hex(r.contrast)?.tuple();
        table.add_row(vec![
            Cell::new(" Aa ")
                .bg(Color::Rgb { r: red, g: green, b: blue })
                .fg(Color::Rgb { r: lr, g: lg, b: lb }),
            Cell::new(&r.hex),
            Cell::new(&r.rgb),
            Cell::new(&r.hsl),
            Cell::new(r.contrast),
        ]);
    }

    let items = reports
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<_>, _>>()?;
    output::table_print(&table, "colors", &items);
    Ok(())
}
