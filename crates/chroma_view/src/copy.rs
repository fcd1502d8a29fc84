//! Copy-to-clipboard with a temporary acknowledgment.
//!
//! A successful copy publishes a [`CopyAck`] on a watch channel and spawns a
//! timer that clears it after [`COPY_ACK_DURATION`]. A newer copy supersedes
//! the pending clear; dropping the [`CopyFeedback`] aborts it.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::card::{CopyFormat, CopyTarget};
use crate::error::Result;

/// How long an acknowledgment stays visible.
pub const COPY_ACK_DURATION: Duration = Duration::from_secs(2);

/// Destination for copied text.
pub trait Clipboard: Send + Sync {
    fn set_text(&self, text: &str) -> Result<()>;
}

impl<T: Clipboard + ?Sized> Clipboard for Box<T> {
    fn set_text(&self, text: &str) -> Result<()> {
        (**self).set_text(text)
    }
}

impl<T: Clipboard + ?Sized> Clipboard for Arc<T> {
    fn set_text(&self, text: &str) -> Result<()> {
        (**self).set_text(text)
    }
}

/// Visible acknowledgment of the most recent copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyAck {
    pub format: CopyFormat,
    seq: u64,
}

impl CopyAck {
    pub fn message(&self) -> String {
        self.format.ack_message()
    }
}

pub struct CopyFeedback<C> {
    clipboard: C,
    state: Arc<watch::Sender<Option<CopyAck>>>,
    revert: Option<JoinHandle<()>>,
    ack_duration: Duration,
    seq: u64,
}

impl<C: Clipboard> CopyFeedback<C> {
    pub fn new(clipboard: C) -> Self {
        let (state, _) = watch::channel(None);
        Self {
            clipboard,
            state: Arc::new(state),
            revert: None,
            ack_duration: COPY_ACK_DURATION,
            seq: 0,
        }
    }

    pub fn with_ack_duration(mut self, duration: Duration) -> Self {
        self.ack_duration = duration;
        self
    }

    pub fn ack_duration(&self) -> Duration {
        self.ack_duration
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Receiver that observes every acknowledgment change.
    pub fn subscribe(&self) -> watch::Receiver<Option<CopyAck>> {
        self.state.subscribe()
    }

    pub fn current(&self) -> Option<CopyAck> {
        *self.state.borrow()
    }

    /// Text to show right now, if any.
    pub fn ack_text(&self) -> Option<String> {
        self.current().map(|ack| ack.message())
    }

    /// Write the target's value to the clipboard and acknowledge it. Must be
    /// called inside a tokio runtime. A clipboard failure leaves the
    /// acknowledgment state untouched.
    pub fn copy(&mut self, target: &CopyTarget) -> Result<()> {
        self.clipboard.set_text(&target.value)?;

        if let Some(previous) = self.revert.take() {
            previous.abort();
        }

        self.seq += 1;
        let seq = self.seq;
        self.state.send_replace(Some(CopyAck {
            format: target.format,
            seq,
        }));
        debug!(format = %target.format, "Copied to clipboard");

        let state = Arc::clone(&self.state);
        let duration = self.ack_duration;
        self.revert = Some(tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            // Only clear the acknowledgment this timer was started for
            state.send_if_modified(|current| {
                if current.is_some_and(|ack| ack.seq == seq) {
                    *current = None;
                    true
                } else {
                    false
                }
            });
        }));

        Ok(())
    }
}

impl<C> Drop for CopyFeedback<C> {
    fn drop(&mut self) {
        if let Some(handle) = self.revert.take() {
            handle.abort();
        }
    }
}
