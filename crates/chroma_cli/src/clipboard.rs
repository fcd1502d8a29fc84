//! Clipboard backends for `chroma copy`.

use std::io::Write;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chroma_view::{Clipboard, ViewError};

/// Sets the clipboard through the terminal with an OSC 52 escape sequence.
/// Works over SSH in terminals that support it.
pub struct Osc52Clipboard;

impl Osc52Clipboard {
    pub fn sequence(text: &str) -> String {
        format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
    }
}

impl Clipboard for Osc52Clipboard {
    fn set_text(&self, text: &str) -> chroma_view::Result<()> {
        // stderr keeps stdout clean for JSON output
        let mut stderr = std::io::stderr().lock();
        stderr
            .write_all(Self::sequence(text).as_bytes())
            .and_then(|()| stderr.flush())
            .map_err(|e| ViewError::Clipboard(e.to_string()))
    }
}

#[cfg(feature = "system-clipboard")]
pub struct SystemClipboard;

#[cfg(feature = "system-clipboard")]
impl Clipboard for SystemClipboard {
    fn set_text(&self, text: &str) -> chroma_view::Result<()> {
        cli_clipboard::set_contents(text.to_string()).map_err(|e| ViewError::Clipboard(e.to_string()))
    }
}

/// Backend chosen at build time.
pub fn default_clipboard() -> Box<dyn Clipboard> {
    #[cfg(feature = "system-clipboard")]
    {
        Box::new(SystemClipboard)
    }
    #[cfg(not(feature = "system-clipboard"))]
    {
        Box::new(Osc52Clipboard)
    }
}
