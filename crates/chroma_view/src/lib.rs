//! Presentation models for a generated palette.
//!
//! - [`card`]: one [`ColorCard`] per color, with Hex/RGB/HSL copy targets
//! - [`copy`]: clipboard writes plus a self-clearing acknowledgment
//! - [`showcase`]: a fixed 800x450 SVG composition of the palette

pub mod card;
pub mod copy;
pub mod error;
pub mod showcase;

pub use card::{cards_for, ColorCard, CopyFormat, CopyTarget};
pub use copy::{Clipboard, CopyAck, CopyFeedback, COPY_ACK_DURATION};
pub use error::{Result, ViewError};
pub use showcase::{render_palette_showcase, render_showcase, ShowcaseColors};
