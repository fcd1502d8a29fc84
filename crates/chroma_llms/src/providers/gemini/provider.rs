//! Gemini provider implementation

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use super::convert::{from_gemini_response, to_gemini_request};
use super::types::{GeminiConfig, GeminiResponse};
use crate::error::{Error, Result};
use crate::provider::TextModel;

/// Gemini text model
pub struct GeminiModel {
    config: GeminiConfig,
    client: Client,
}

impl GeminiModel {
    pub const PROVIDER_ID: &'static str = "gemini";

    /// Create a new Gemini model client. The key is required up front.
    pub fn new(config: GeminiConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(Error::MissingApiKey(Self::PROVIDER_ID.to_string()));
        }

        let client = Client::new();
        Ok(Self { config, client })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }
}

#[async_trait]
impl TextModel for GeminiModel {
    fn provider_id(&self) -> &str {
        Self::PROVIDER_ID
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn generate_json(&self, prompt: &str, schema: &Value) -> Result<String> {
        let url = self.endpoint();
        let body = to_gemini_request(prompt, schema);
        debug!(model = %self.config.model, "Gemini generateContent request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            warn!(status = status.as_u16(), "Gemini API returned an error");
            return Err(Error::transport(format!("Gemini API error {status}: {text}")));
        }

        let parsed: GeminiResponse = serde_json::from_str(&text)
            .map_err(|e| Error::response_format(format!("Gemini envelope: {e}")))?;
        from_gemini_response(parsed)
    }
}
