//! Text model abstraction.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// A hosted generative text model that can answer with schema-constrained JSON.
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Short provider id, e.g. `"gemini"`.
    fn provider_id(&self) -> &str;

    /// Model identifier sent with each request.
    fn model(&self) -> &str;

    /// Send `prompt` and return the raw JSON text of the answer.
    ///
    /// Non-2xx statuses and network failures are [`Error::Transport`];
    /// an envelope without answer text is [`Error::ResponseFormat`].
    ///
    /// [`Error::Transport`]: crate::Error::Transport
    /// [`Error::ResponseFormat`]: crate::Error::ResponseFormat
    async fn generate_json(&self, prompt: &str, schema: &Value) -> Result<String>;
}
