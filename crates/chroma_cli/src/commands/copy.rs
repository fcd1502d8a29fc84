//! `chroma copy`

use anyhow::{Context, Result};
use chroma_view::{Clipboard, CopyFeedback, CopyFormat, CopyTarget};

use crate::cli::CopyFormatArg;
use crate::clipboard::default_clipboard;
use crate::output;

impl From<CopyFormatArg> for CopyFormat {
    fn from(arg: CopyFormatArg) -> Self {
        match arg {
            CopyFormatArg::Hex => CopyFormat::Hex,
            CopyFormatArg::Rgb => CopyFormat::Rgb,
            CopyFormatArg::Hsl => CopyFormat::Hsl,
        }
    }
}

pub async fn handle(color: &str, format: CopyFormatArg) -> Result<()> {
    let target = CopyTarget::for_hex(color, format.into())
        .with_context(|| format!("'{color}' is not a #RRGGBB color"))?;
    copy_with(default_clipboard(), &target).await
}

/// Copy and keep the acknowledgment on screen until it expires.
pub async fn copy_with<C: Clipboard>(clipboard: C, target: &CopyTarget) -> Result<()> {
    let mut feedback = CopyFeedback::new(clipboard);
    let mut state = feedback.subscribe();
    feedback.copy(target)?;

    if output::is_json() {
        let data = serde_json::json!({ "format": target.format.label(), "value": target.value });
        output::data("copied", &data);
        return Ok(());
    }

    let ack = feedback.ack_text().unwrap_or_default();
    let spinner = output::spinner(&format!("{ack} {}", target.value));
    let _ = state.borrow_and_update();
    // Resolves once the acknowledgment is cleared
    let _ = state.changed().await;
    output::spinner_success(&spinner, &format!("{} {}", target.format.label(), target.value));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MemoryClipboard(Arc<Mutex<Option<String>>>);

    impl Clipboard for MemoryClipboard {
        fn set_text(&self, text: &str) -> chroma_view::Result<()> {
            *self.0.lock().unwrap() = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_format_arg_mapping() {
        assert_eq!(CopyFormat::from(CopyFormatArg::Rgb), CopyFormat::Rgb);
        assert_eq!(CopyFormat::from(CopyFormatArg::Hsl), CopyFormat::Hsl);
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_with_writes_clipboard_and_waits() {
        let clipboard = MemoryClipboard::default();
        let target = CopyTarget::for_hex("#ff0000", CopyFormat::Rgb).unwrap();
        let start = tokio::time::Instant::now();

        copy_with(clipboard.clone(), &target).await.unwrap();

        assert_eq!(clipboard.0.lock().unwrap().as_deref(), Some("rgb(255, 0, 0)"));
        assert!(start.elapsed() >= chroma_view::COPY_ACK_DURATION);
    }
}
