//! Hero image client: one POST to an image-generation endpoint, answer
//! surfaced as a PNG data URI.

use std::time::{Duration, Instant};

use chroma_core::{ColorInfo, Palette};
use chroma_observability::{provider_span, record_duration, record_error};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn, Instrument};

use crate::error::{Error, Result};
use crate::guard::guard;
use crate::prompt::build_hero_prompt;

/// Prefix of every image returned by [`HeroImageClient::generate`].
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Default deadline for one image request. Image models are slow.
pub const DEFAULT_IMAGE_TIMEOUT: Duration = Duration::from_secs(120);

/// Configuration for the image endpoint
#[derive(Debug, Clone)]
pub struct ImageConfig {
    /// API key for bearer authentication
    pub api_key: String,
    /// Base URL (default: https://api.openai.com/v1)
    pub base_url: String,
    /// Model identifier (default: dall-e-3)
    pub model: String,
    /// Target resolution (default: 1024x1024)
    pub size: String,
}

impl ImageConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.openai.com/v1";
    pub const DEFAULT_MODEL: &'static str = "dall-e-3";
    pub const DEFAULT_SIZE: &'static str = "1024x1024";

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            model: Self::DEFAULT_MODEL.to_string(),
            size: Self::DEFAULT_SIZE.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }
}

/// `images/generations` request body
#[derive(Debug, Serialize)]
pub struct ImageRequest {
    pub model: String,
    pub prompt: String,
    pub n: u8,
    pub size: String,
    pub response_format: String,
}

/// `images/generations` response body
#[derive(Debug, Deserialize)]
pub struct ImageResponse {
    #[serde(default)]
    pub data: Vec<ImageDatum>,
}

#[derive(Debug, Deserialize)]
pub struct ImageDatum {
    pub b64_json: Option<String>,
}

pub struct HeroImageClient {
    config: ImageConfig,
    client: Client,
    timeout: Duration,
}

impl HeroImageClient {
    pub const PROVIDER_ID: &'static str = "images";

    pub fn new(config: ImageConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(Error::MissingApiKey(Self::PROVIDER_ID.to_string()));
        }
        Ok(Self {
            config,
            client: Client::new(),
            timeout: DEFAULT_IMAGE_TIMEOUT,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn to_request(&self, colors: &[ColorInfo], concept: &str) -> ImageRequest {
        ImageRequest {
            model: self.config.model.clone(),
            prompt: build_hero_prompt(colors, concept),
            n: 1,
            size: self.config.size.clone(),
            response_format: "b64_json".to_string(),
        }
    }

    /// Generate a hero background for the given colors and concept.
    pub async fn generate(
        &self,
        colors: &[ColorInfo],
        concept: &str,
        cancel: Option<CancellationToken>,
    ) -> Result<String> {
        let span = provider_span!(Self::PROVIDER_ID, "hero_image");
        async {
            info!(model = %self.config.model, "Generating hero image");
            let start = Instant::now();
            let result = guard(self.timeout, cancel, self.request(colors, concept)).await;
            record_duration("duration_ms", start.elapsed());
            if let Err(e) = &result {
                record_error(e);
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn request(&self, colors: &[ColorInfo], concept: &str) -> Result<String> {
        let url = format!("{}/images/generations", self.config.base_url);
        let body = self.to_request(colors, concept);

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
            warn!(status = status.as_u16(), "Image endpoint returned an error");
            return Err(Error::ImageGeneration {
                status: status.as_u16(),
                message: text,
            });
        }

        let parsed: ImageResponse = serde_json::from_str(&text)
            .map_err(|e| Error::response_format(format!("image envelope: {e}")))?;
        let payload = parsed
            .data
            .into_iter()
            .next()
            .and_then(|d| d.b64_json)
            .filter(|b64| !b64.is_empty())
            .ok_or(Error::NoImageData)?;

        Ok(format!("{PNG_DATA_URI_PREFIX}{payload}"))
    }

    /// Generate and attach a hero image. On failure the palette is untouched.
    pub async fn attach(&self, palette: &mut Palette, cancel: Option<CancellationToken>) -> Result<()> {
        let data_uri = self.generate(palette.colors(), palette.concept(), cancel).await?;
        palette.attach_hero_image(data_uri);
        Ok(())
    }
}
