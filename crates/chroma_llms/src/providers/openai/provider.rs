//! OpenAI provider implementation

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::{debug, warn};

use super::types::{OpenAIConfig, OpenAIMessage, OpenAIRequest, OpenAIResponse};
use crate::error::{Error, Result};
use crate::provider::TextModel;

/// OpenAI-compatible text model
pub struct OpenAIModel {
    config: OpenAIConfig,
    client: Client,
}

impl OpenAIModel {
    pub const PROVIDER_ID: &'static str = "openai";

    /// Create a new OpenAI model client. The key is required up front.
    pub fn new(config: OpenAIConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(Error::MissingApiKey(Self::PROVIDER_ID.to_string()));
        }

        let client = Client::new();
        Ok(Self { config, client })
    }
}

/// Chat request with strict `json_schema` structured output.
pub(crate) fn to_openai_request(model: &str, prompt: &str, schema: &Value) -> OpenAIRequest {
    OpenAIRequest {
        model: model.to_string(),
        messages: vec![OpenAIMessage {
            role: "user".to_string(),
            content: Some(prompt.to_string()),
            refusal: None,
        }],
        response_format: json!({
            "type": "json_schema",
            "json_schema": {
                "name": "palette",
                "strict": true,
                "schema": schema,
            }
        }),
    }
}

pub(crate) fn from_openai_response(resp: OpenAIResponse) -> Result<String> {
    let choice = resp
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| Error::response_format("response has no choices"))?;

    if let Some(refusal) = choice.message.refusal {
        return Err(Error::response_format(format!("model refused: {refusal}")));
    }

    match choice.message.content {
        Some(content) if !content.trim().is_empty() => Ok(content),
        _ => Err(Error::response_format(format!(
            "choice has no content (finish reason: {})",
            choice.finish_reason.as_deref().unwrap_or("unknown")
        ))),
    }
}

#[async_trait]
impl TextModel for OpenAIModel {
    fn provider_id(&self) -> &str {
        Self::PROVIDER_ID
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn generate_json(&self, prompt: &str, schema: &Value) -> Result<String> {
        let url = format!("{}/chat/completions", self.config.base_url);
        let body = to_openai_request(&self.config.model, prompt, schema);
        debug!(model = %self.config.model, "OpenAI chat completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            warn!(status = status.as_u16(), "OpenAI API returned an error");
            return Err(Error::transport(format!("OpenAI API error {status}: {text}")));
        }

        let parsed: OpenAIResponse = serde_json::from_str(&text)
            .map_err(|e| Error::response_format(format!("OpenAI envelope: {e}")))?;
        from_openai_response(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_normalization() {
        let config = OpenAIConfig::new("k").with_base_url("https://example.test/v1/chat/completions/");
        assert_eq!(config.base_url, "https://example.test/v1");
        let config = OpenAIConfig::new("k").with_base_url("http://localhost:1234/v1/");
        assert_eq!(config.base_url, "http://localhost:1234/v1");
    }

    #[test]
    fn test_missing_key_rejected() {
        assert!(matches!(
            OpenAIModel::new(OpenAIConfig::new("  ")),
            Err(Error::MissingApiKey(ref p)) if p == "openai"
        ));
    }

    #[test]
    fn test_request_uses_strict_json_schema() {
        let req = to_openai_request("gpt-x", "hello", &json!({"type": "object"}));
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body["model"], "gpt-x");
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "hello");
        assert!(body["messages"][0].get("refusal").is_none());
        assert_eq!(body["response_format"]["type"], "json_schema");
        assert_eq!(body["response_format"]["json_schema"]["strict"], true);
        assert_eq!(body["response_format"]["json_schema"]["schema"]["type"], "object");
    }

    #[test]
    fn test_refusal_is_response_format_error() {
        let resp: OpenAIResponse = serde_json::from_value(json!({
            "choices": [{"message": {"role": "assistant", "content": null, "refusal": "no"}, "finish_reason": "stop"}]
        }))
        .unwrap();
        assert!(matches!(from_openai_response(resp), Err(Error::ResponseFormat(_))));
    }

    #[test]
    fn test_no_choices() {
        let resp: OpenAIResponse = serde_json::from_value(json!({"choices": []})).unwrap();
        assert!(from_openai_response(resp).is_err());
    }
}
