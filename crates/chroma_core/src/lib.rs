//! chroma-core: color math and the palette data model.
//!
//! ```rust
//! use chroma_core::{contrast_color, hex_to_hsl, hex_to_rgb, CONTRAST_LIGHT};
//!
//! assert_eq!(hex_to_rgb("#ff0000").unwrap(), "rgb(255, 0, 0)");
//! assert_eq!(hex_to_hsl("#ff0000").unwrap(), "hsl(0, 100%, 50%)");
//! assert_eq!(contrast_color("#000000").unwrap(), CONTRAST_LIGHT);
//! ```

pub mod color;
pub mod error;
pub mod palette;

pub use color::{
    contrast_color, hex_to_hsl, hex_to_rgb, Hsl, Rgb, CONTRAST_DARK, CONTRAST_LIGHT,
};
pub use error::{ChromaError, Result};
pub use palette::{ColorInfo, ColorRole, Palette, PaletteDraft, PaletteId, PALETTE_SIZE};
