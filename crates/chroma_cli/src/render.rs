//! True-color terminal rendering of palette cards.

use anyhow::Result;
use chroma_core::{ChromaError, Palette, Rgb};
use chroma_view::{cards_for, ColorCard};
use console::style;
use crossterm::style::{Color, Stylize};

use crate::output;

const SWATCH_WIDTH: usize = 14;

pub fn term_color(hex: &str) -> Result<Color, ChromaError> {
    let (r, g, b) = Rgb::from_hex(hex)?.tuple();
    Ok(Color::Rgb { r, g, b })
}

/// Lines for one card: swatch with role label, name, description, copy values.
pub fn card_lines(card: &ColorCard) -> Result<Vec<String>, ChromaError> {
    let swatch = term_color(&card.hex)?;
    let label = term_color(card.label_color)?;

    let top = format!(" {:<width$}", card.role_label, width = SWATCH_WIDTH - 1)
        .with(label)
        .on(swatch)
        .bold();
    let bottom = " ".repeat(SWATCH_WIDTH).on(swatch);

    let values = card
        .targets
        .iter()
        .map(|t| format!("{} {}", style(t.format.label()).dim(), t.value))
        .collect::<Vec<_>>()
        .join("   ");

    Ok(vec![
        format!("{top}  {}", style(&card.name).bold()),
        format!("{bottom}  {}", style(&card.description).dim()),
        format!("{}  {values}", " ".repeat(SWATCH_WIDTH)),
    ])
}

pub fn print_palette(palette: &Palette) -> Result<()> {
    let cards = cards_for(palette)?;

    if output::is_json() {
        // The hero image goes to its own file; keep the JSON line small
        let mut shown = palette.clone();
        shown.clear_hero_image();
        output::data("palette", &shown);
        return Ok(());
    }

    output::header(palette.concept());
    println!();
    for card in &cards {
        for line in card_lines(card)? {
            println!("{line}");
        }
        println!();
    }
    output::dim(&format!("palette {} · {}", palette.id(), palette.timestamp().format("%Y-%m-%d %H:%M:%S UTC")));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_core::{ColorInfo, ColorRole};

    #[test]
    fn test_term_color() {
        assert_eq!(
            term_color("#102030").unwrap(),
            Color::Rgb { r: 16, g: 32, b: 48 }
        );
        assert!(term_color("#1020").is_err());
    }

    #[test]
    fn test_card_lines_mention_values() {
        let card = ColorCard::new(&ColorInfo::new("#f59e0b", "Lantern", ColorRole::Accent1, "Warm CTA")).unwrap();
        let lines = card_lines(&card).unwrap();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("ACCENT-1"));
        assert!(lines[0].contains("Lantern"));
        assert!(lines[1].contains("Warm CTA"));
        assert!(lines[2].contains("#f59e0b"));
        assert!(lines[2].contains("rgb(245, 158, 11)"));
    }
}
