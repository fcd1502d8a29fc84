//! Color math: hex parsing, RGB/HSL string forms, readable contrast color.
//!
//! Every function here is pure. Malformed hex input is rejected with
//! [`ChromaError::InvalidColorFormat`] instead of producing garbage channels.

use std::fmt;
use std::str::FromStr;

use crate::error::{ChromaError, Result};

/// Text color used on dark backgrounds.
pub const CONTRAST_LIGHT: &str = "#ffffff";
/// Text color used on light backgrounds.
pub const CONTRAST_DARK: &str = "#09090b";

/// Luminance at or above this value counts as a light background.
const LUMINANCE_MIDPOINT: f64 = 0.5;

/// RGB triplet parsed from a `#RRGGBB` string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb(r, g, b)
    }

    /// Parse six hex digits, optionally prefixed with `#`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ChromaError::InvalidColorFormat(hex.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ChromaError::InvalidColorFormat(hex.to_string()))
        };
        Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn r(self) -> u8 {
        self.0
    }
    pub fn g(self) -> u8 {
        self.1
    }
    pub fn b(self) -> u8 {
        self.2
    }

    /// Canonical lower-case `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// Perceptual luminance in `[0, 1]` using the ITU-R BT.601 weights.
    pub fn luminance(self) -> f64 {
        (0.299 * f64::from(self.0) + 0.587 * f64::from(self.1) + 0.114 * f64::from(self.2))
            / 255.0
    }

    /// Standard max/min-channel RGB to HSL transform, rounded to whole units.
    #[allow(clippy::many_single_char_names)]
    pub fn to_hsl(self) -> Hsl {
        let Rgb(r8, g8, b8) = self;
        let max_c = r8.max(g8).max(b8);
        let min_c = r8.min(g8).min(b8);

        let r = f64::from(r8) / 255.0;
        let g = f64::from(g8) / 255.0;
        let b = f64::from(b8) / 255.0;
        let max = f64::from(max_c) / 255.0;
        let min = f64::from(min_c) / 255.0;
        let l = (max + min) / 2.0;

        if max_c == min_c {
            return Hsl::from_fractions(0.0, 0.0, l);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max_c == r8 {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max_c == g8 {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl::from_fractions(h / 6.0, s, l)
    }

    /// Fixed light or dark text color that stays legible on this background.
    pub fn contrast(self) -> &'static str {
        if self.luminance() < LUMINANCE_MIDPOINT {
            CONTRAST_LIGHT
        } else {
            CONTRAST_DARK
        }
    }

    /// Tuple for terminal color APIs: `(r, g, b)`.
    pub fn tuple(self) -> (u8, u8, u8) {
        (self.0, self.1, self.2)
    }
}

impl FromStr for Rgb {
    type Err = ChromaError;

    fn from_str(s: &str) -> Result<Self> {
        Rgb::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.0, self.1, self.2)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(c: Rgb) -> Self {
        c.tuple()
    }
}

/// Hue in whole degrees `[0, 360)`, saturation and lightness in whole percent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn from_fractions(h: f64, s: f64, l: f64) -> Self {
        let h = (h * 360.0).round() as u16 % 360;
        let s = (s * 100.0).round().clamp(0.0, 100.0) as u8;
        let l = (l * 100.0).round().clamp(0.0, 100.0) as u8;
        Hsl { h, s, l }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

/// `"#ff0000"` -> `"rgb(255, 0, 0)"`.
pub fn hex_to_rgb(hex: &str) -> Result<String> {
    Ok(Rgb::from_hex(hex)?.to_string())
}

/// `"#ff0000"` -> `"hsl(0, 100%, 50%)"`.
pub fn hex_to_hsl(hex: &str) -> Result<String> {
    Ok(Rgb::from_hex(hex)?.to_hsl().to_string())
}

/// [`CONTRAST_LIGHT`] for dark inputs, [`CONTRAST_DARK`] for light ones.
pub fn contrast_color(hex: &str) -> Result<&'static str> {
    Ok(Rgb::from_hex(hex)?.contrast())
}
