//! Palette generation client: seeds in, validated palette out.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chroma_core::{Palette, PaletteDraft};
use chroma_observability::{provider_span, record_duration, record_error};
use tokio_util::sync::CancellationToken;
use tracing::{info, Instrument};

use crate::error::{Error, Result};
use crate::guard::guard;
use crate::parse::parse_palette_response;
use crate::prompt::{build_palette_prompt, palette_schema};
use crate::provider::TextModel;

/// Default deadline for one palette request.
pub const DEFAULT_PALETTE_TIMEOUT: Duration = Duration::from_secs(60);

/// Issues exactly one text-model request per call. No retries, no caching.
#[derive(Clone)]
pub struct PaletteClient {
    model: Arc<dyn TextModel>,
    timeout: Duration,
}

impl std::fmt::Debug for PaletteClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaletteClient")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl PaletteClient {
    pub fn new<M: TextModel + 'static>(model: M) -> Self {
        Self::from_arc(Arc::new(model))
    }

    pub fn from_arc(model: Arc<dyn TextModel>) -> Self {
        Self {
            model,
            timeout: DEFAULT_PALETTE_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn provider_id(&self) -> &str {
        self.model.provider_id()
    }

    pub fn model(&self) -> &str {
        self.model.model()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Generate the bare `{colors, concept}` payload.
    pub async fn generate_draft(
        &self,
        seeds: &[String],
        cancel: Option<CancellationToken>,
    ) -> Result<PaletteDraft> {
        if seeds.iter().all(|s| s.trim().is_empty()) {
            return Err(Error::InvalidRequest(
                "at least one non-empty seed color is required".into(),
            ));
        }

        let span = provider_span!(self.model.provider_id(), "generate_palette");
        async {
            info!(model = %self.model.model(), seeds = seeds.len(), "Generating palette");
            let prompt = build_palette_prompt(seeds);
            let schema = palette_schema();

            let start = Instant::now();
            let result = guard(
                self.timeout,
                cancel,
                self.model.generate_json(&prompt, &schema),
            )
            .await
            .and_then(|raw| parse_palette_response(&raw));
            record_duration("duration_ms", start.elapsed());

            if let Err(e) = &result {
                record_error(e);
            }
            result
        }
        .instrument(span)
        .await
    }

    /// Generate a palette with a fresh id and timestamp.
    pub async fn generate(
        &self,
        seeds: &[String],
        cancel: Option<CancellationToken>,
    ) -> Result<Palette> {
        let draft = self.generate_draft(seeds, cancel).await?;
        let palette = Palette::from_draft(draft)?;
        info!(palette.id = %palette.id(), "Palette generated");
        Ok(palette)
    }
}
