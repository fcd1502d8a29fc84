use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::{ChromaError, Result};

/// Number of colors in a complete palette, one per [`ColorRole`].
pub const PALETTE_SIZE: usize = 6;

/// Semantic slot a generated color fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorRole {
    #[serde(rename = "background")]
    Background,
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "primary")]
    Primary,
    #[serde(rename = "secondary")]
    Secondary,
    #[serde(rename = "accent-1")]
    Accent1,
    #[serde(rename = "accent-2")]
    Accent2,
}

impl ColorRole {
    /// All roles in display order.
    pub const ALL: [ColorRole; PALETTE_SIZE] = [
        ColorRole::Background,
        ColorRole::Text,
        ColorRole::Primary,
        ColorRole::Secondary,
        ColorRole::Accent1,
        ColorRole::Accent2,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorRole::Background => "background",
            ColorRole::Text => "text",
            ColorRole::Primary => "primary",
            ColorRole::Secondary => "secondary",
            ColorRole::Accent1 => "accent-1",
            ColorRole::Accent2 => "accent-2",
        }
    }

    /// Upper-case label shown on a color card.
    pub fn label(&self) -> String {
        self.as_str().to_uppercase()
    }

    /// Guidance given to the model for this role.
    pub fn guidance(&self) -> &'static str {
        match self {
            ColorRole::Background => "usually light or dark neutral",
            ColorRole::Text => "high contrast to background",
            ColorRole::Primary => "the main brand color",
            ColorRole::Secondary => "supporting brand color",
            ColorRole::Accent1 => "for call-to-actions",
            ColorRole::Accent2 => "for variety",
        }
    }
}

impl FromStr for ColorRole {
    type Err = ChromaError;

    fn from_str(s: &str) -> Result<Self> {
        ColorRole::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ChromaError::InvalidPalette(format!("unknown color role {s:?}")))
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One role-tagged color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorInfo {
    pub hex: String,
    pub name: String,
    pub role: ColorRole,
    pub description: String,
}

impl ColorInfo {
    pub fn new(
        hex: impl Into<String>,
        name: impl Into<String>,
        role: ColorRole,
        description: impl Into<String>,
    ) -> Self {
        Self {
            hex: hex.into(),
            name: name.into(),
            role,
            description: description.into(),
        }
    }

    pub fn rgb(&self) -> Result<Rgb> {
        Rgb::from_hex(&self.hex)
    }
}

/// Generation payload: the colors and concept before a palette gets an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteDraft {
    pub colors: Vec<ColorInfo>,
    pub concept: String,
}

impl PaletteDraft {
    /// Exactly six colors with parseable hex, pairwise distinct roles and a
    /// non-blank concept.
    pub fn validate(&self) -> Result<()> {
        if self.colors.len() != PALETTE_SIZE {
            return Err(ChromaError::InvalidPalette(format!(
                "expected {PALETTE_SIZE} colors, got {}",
                self.colors.len()
            )));
        }

        let mut seen = HashSet::with_capacity(PALETTE_SIZE);
        for color in &self.colors {
            color.rgb().map_err(|_| {
                ChromaError::InvalidPalette(format!(
                    "color {:?} has malformed hex {:?}",
                    color.name, color.hex
                ))
            })?;
            if !seen.insert(color.role) {
                return Err(ChromaError::InvalidPalette(format!(
                    "role {} appears more than once",
                    color.role
                )));
            }
        }

        if self.concept.trim().is_empty() {
            return Err(ChromaError::InvalidPalette("concept is empty".into()));
        }

        Ok(())
    }

    /// Rewrite every hex into canonical `#rrggbb`. Colors with malformed hex
    /// are left as they are; call [`validate`](Self::validate) first.
    pub fn normalized(mut self) -> Self {
        for color in &mut self.colors {
            if let Ok(rgb) = color.rgb() {
                color.hex = rgb.to_hex();
            }
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaletteId(pub String);

impl PaletteId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PaletteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PaletteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A resolved palette. Immutable apart from the optional hero image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    id: PaletteId,
    colors: Vec<ColorInfo>,
    concept: String,
    timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hero_image: Option<String>,
}

impl Palette {
    /// Build a palette from a validated draft.
    pub fn from_draft(draft: PaletteDraft) -> Result<Self> {
        draft.validate()?;
        let draft = draft.normalized();
        Ok(Self {
            id: PaletteId::new(),
            colors: draft.colors,
            concept: draft.concept,
            timestamp: Utc::now(),
            hero_image: None,
        })
    }

    pub fn id(&self) -> &PaletteId {
        &self.id
    }

    pub fn colors(&self) -> &[ColorInfo] {
        &self.colors
    }

    pub fn concept(&self) -> &str {
        &self.concept
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// `data:image/png;base64,...` once a hero image is attached.
    pub fn hero_image(&self) -> Option<&str> {
        self.hero_image.as_deref()
    }

    pub fn color_for(&self, role: ColorRole) -> Option<&ColorInfo> {
        self.colors.iter().find(|c| c.role == role)
    }

    /// Colors sorted into [`ColorRole::ALL`] order.
    pub fn colors_in_role_order(&self) -> Vec<&ColorInfo> {
        ColorRole::ALL
            .iter()
            .filter_map(|role| self.color_for(*role))
            .collect()
    }

    pub fn attach_hero_image(&mut self, data_uri: impl Into<String>) {
        self.hero_image = Some(data_uri.into());
    }

    pub fn clear_hero_image(&mut self) {
        self.hero_image = None;
    }

    pub fn has_hero_image(&self) -> bool {
        self.hero_image.is_some()
    }
}
