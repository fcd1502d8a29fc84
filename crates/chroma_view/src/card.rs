//! Card model for a single palette color.

use std::fmt;
use std::str::FromStr;

use chroma_core::{contrast_color, hex_to_hsl, hex_to_rgb, ChromaError, ColorInfo, ColorRole, Palette};

/// Representation a card offers for copying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CopyFormat {
    Hex,
    Rgb,
    Hsl,
}

impl CopyFormat {
    pub const ALL: [CopyFormat; 3] = [CopyFormat::Hex, CopyFormat::Rgb, CopyFormat::Hsl];

    pub fn label(&self) -> &'static str {
        match self {
            CopyFormat::Hex => "Hex",
            CopyFormat::Rgb => "RGB",
            CopyFormat::Hsl => "HSL",
        }
    }

    /// Acknowledgment shown after a successful copy.
    pub fn ack_message(&self) -> String {
        format!("{} Copied!", self.label())
    }
}

impl FromStr for CopyFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hex" => Ok(CopyFormat::Hex),
            "rgb" => Ok(CopyFormat::Rgb),
            "hsl" => Ok(CopyFormat::Hsl),
            other => Err(format!("unknown copy format {other:?} (expected hex, rgb or hsl)")),
        }
    }
}

impl fmt::Display for CopyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyTarget {
    pub format: CopyFormat,
    pub value: String,
}

impl CopyTarget {
    /// Render `hex` in the given format. The hex form is kept as written.
    pub fn for_hex(hex: &str, format: CopyFormat) -> Result<Self, ChromaError> {
        let value = match format {
            CopyFormat::Hex => {
                chroma_core::Rgb::from_hex(hex)?;
                hex.to_string()
            }
            CopyFormat::Rgb => hex_to_rgb(hex)?,
            CopyFormat::Hsl => hex_to_hsl(hex)?,
        };
        Ok(Self { format, value })
    }
}

/// Everything needed to draw one color: swatch, legible role label, text
/// and the three copyable forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorCard {
    pub role: ColorRole,
    pub role_label: String,
    pub name: String,
    pub description: String,
    pub hex: String,
    /// Text color for the role label drawn on the swatch.
    pub label_color: &'static str,
    pub targets: [CopyTarget; 3],
}

impl ColorCard {
    pub fn new(color: &ColorInfo) -> Result<Self, ChromaError> {
        let label_color = contrast_color(&color.hex)?;
        let target = |format| CopyTarget::for_hex(&color.hex, format);

        Ok(Self {
            role: color.role,
            role_label: color.role.label(),
            name: color.name.clone(),
            description: color.description.clone(),
            hex: color.hex.clone(),
            label_color,
            targets: [
                target(CopyFormat::Hex)?,
                target(CopyFormat::Rgb)?,
                target(CopyFormat::Hsl)?,
            ],
        })
    }

    pub fn target(&self, format: CopyFormat) -> &CopyTarget {
        match format {
            CopyFormat::Hex => &self.targets[0],
            CopyFormat::Rgb => &self.targets[1],
            CopyFormat::Hsl => &self.targets[2],
        }
    }

    /// True when the swatch is dark and carries a light label.
    pub fn is_dark(&self) -> bool {
        self.label_color == chroma_core::CONTRAST_LIGHT
    }
}

/// Cards for every color of a palette, in role display order.
pub fn cards_for(palette: &Palette) -> Result<Vec<ColorCard>, ChromaError> {
    palette
        .colors_in_role_order()
        .into_iter()
        .map(ColorCard::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_core::{CONTRAST_DARK, CONTRAST_LIGHT};

    #[test]
    fn test_card_from_color() {
        let color = ColorInfo::new("#ff0000", "Signal", ColorRole::Accent1, "Loud on purpose");
        let card = ColorCard::new(&color).unwrap();

        assert_eq!(card.role_label, "ACCENT-1");
        assert_eq!(card.name, "Signal");
        assert_eq!(card.description, "Loud on purpose");
        assert_eq!(card.target(CopyFormat::Hex).value, "#ff0000");
        assert_eq!(card.target(CopyFormat::Rgb).value, "rgb(255, 0, 0)");
        assert_eq!(card.target(CopyFormat::Hsl).value, "hsl(0, 100%, 50%)");
        assert_eq!(card.label_color, CONTRAST_DARK);
        assert!(!card.is_dark());
    }

    #[test]
    fn test_dark_swatch_gets_light_label() {
        let color = ColorInfo::new("#0f172a", "Ink", ColorRole::Text, "Body copy");
        let card = ColorCard::new(&color).unwrap();
        assert_eq!(card.label_color, CONTRAST_LIGHT);
        assert!(card.is_dark());
    }

    #[test]
    fn test_invalid_hex_is_rejected() {
        let color = ColorInfo::new("#zzzzzz", "Broken", ColorRole::Primary, "n/a");
        assert_eq!(
            ColorCard::new(&color),
            Err(ChromaError::InvalidColorFormat("#zzzzzz".into()))
        );
    }

    #[test]
    fn test_targets_in_fixed_order() {
        let color = ColorInfo::new("#123456", "Deep", ColorRole::Secondary, "x");
        let card = ColorCard::new(&color).unwrap();
        let formats: Vec<CopyFormat> = card.targets.iter().map(|t| t.format).collect();
        assert_eq!(formats, CopyFormat::ALL.to_vec());
    }

    #[test]
    fn test_target_for_bare_hex() {
        let target = CopyTarget::for_hex("00ff00", CopyFormat::Hsl).unwrap();
        assert_eq!(target.value, "hsl(120, 100%, 50%)");
        assert_eq!(CopyTarget::for_hex("#ABCDEF", CopyFormat::Hex).unwrap().value, "#ABCDEF");
        assert!(CopyTarget::for_hex("#abc", CopyFormat::Hex).is_err());
    }

    #[test]
    fn test_copy_format_labels() {
        assert_eq!(CopyFormat::Hex.ack_message(), "Hex Copied!");
        assert_eq!(CopyFormat::Rgb.ack_message(), "RGB Copied!");
        assert_eq!(CopyFormat::Hsl.ack_message(), "HSL Copied!");
        assert_eq!("RGB".parse::<CopyFormat>().unwrap(), CopyFormat::Rgb);
        assert!("cmyk".parse::<CopyFormat>().is_err());
    }

    #[test]
    fn test_cards_for_palette_in_role_order() {
        let draft = chroma_core::PaletteDraft {
            colors: vec![
                ColorInfo::new("#10b981", "Mint", ColorRole::Accent2, "a"),
                ColorInfo::new("#f59e0b", "Amber", ColorRole::Accent1, "b"),
                ColorInfo::new("#475569", "Slate", ColorRole::Secondary, "c"),
                ColorInfo::new("#1d4ed8", "Cobalt", ColorRole::Primary, "d"),
                ColorInfo::new("#0f172a", "Ink", ColorRole::Text, "e"),
                ColorInfo::new("#f8fafc", "Paper", ColorRole::Background, "f"),
            ],
            concept: "Ordered".into(),
        };
        let palette = Palette::from_draft(draft).unwrap();
        let cards = cards_for(&palette).unwrap();
        let labels: Vec<&str> = cards.iter().map(|c| c.role_label.as_str()).collect();
        assert_eq!(
            labels,
            ["BACKGROUND", "TEXT", "PRIMARY", "SECONDARY", "ACCENT-1", "ACCENT-2"]
        );
    }
}
