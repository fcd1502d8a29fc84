//! Environment-backed configuration. This is the only module that reads the
//! process environment.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use chroma_llms::{
    GeminiConfig, GeminiModel, HeroImageClient, ImageConfig, OpenAIConfig, OpenAIModel,
    PaletteClient, DEFAULT_IMAGE_TIMEOUT, DEFAULT_PALETTE_TIMEOUT,
};
use clap::ValueEnum;

/// Directory (per project and under the home directory) holding an `env` file.
pub const CONFIG_DIR: &str = ".chroma";

// Upper bound on parent directories visited when looking for config files
const MAX_WALK_UP: usize = 32;

/// Text model provider selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Provider {
    #[default]
    Gemini,
    #[value(name = "openai")]
    OpenAI,
}

impl Provider {
    pub const ALL: [Provider; 2] = [Provider::Gemini, Provider::OpenAI];

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Gemini => "gemini",
            Provider::OpenAI => "openai",
        }
    }

    /// Environment variable holding this provider's API key.
    pub fn key_var(&self) -> &'static str {
        match self {
            Provider::Gemini => "GEMINI_API_KEY",
            Provider::OpenAI => "OPENAI_API_KEY",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Provider::Gemini => "Google Gemini models (palette generation)",
            Provider::OpenAI => "OpenAI-compatible models (palettes and hero images)",
        }
    }
}

impl FromStr for Provider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "gemini" | "google" => Ok(Provider::Gemini),
            "openai" | "open-ai" => Ok(Provider::OpenAI),
            other => Err(anyhow!("Unknown provider '{other}'. Available: gemini, openai")),
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChromaConfig {
    pub provider: Provider,
    pub gemini_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    /// Text model override; provider default when unset
    pub model: Option<String>,
    pub image_model: Option<String>,
    pub gemini_base_url: Option<String>,
    pub openai_base_url: Option<String>,
    pub image_base_url: Option<String>,
    pub timeout: Duration,
    pub image_timeout: Duration,
}

impl Default for ChromaConfig {
    fn default() -> Self {
        Self {
            provider: Provider::default(),
            gemini_api_key: None,
            openai_api_key: None,
            model: None,
            image_model: None,
            gemini_base_url: None,
            openai_base_url: None,
            image_base_url: None,
            timeout: DEFAULT_PALETTE_TIMEOUT,
            image_timeout: DEFAULT_IMAGE_TIMEOUT,
        }
    }
}

impl ChromaConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let gemini_api_key = get("GEMINI_API_KEY").or_else(|| get("API_KEY"));
        let openai_api_key = get("OPENAI_API_KEY");

        let provider = match get("CHROMA_PROVIDER") {
            Some(name) => name.parse().context("CHROMA_PROVIDER")?,
            None if gemini_api_key.is_none() && openai_api_key.is_some() => Provider::OpenAI,
            None => Provider::Gemini,
        };

        let secs = |key: &str, default: Duration| -> Result<Duration> {
            match get(key) {
                Some(raw) => {
                    let secs: u64 = raw
                        .parse()
                        .with_context(|| format!("{key} must be a whole number of seconds, got '{raw}'"))?;
                    if secs == 0 {
                        return Err(anyhow!("{key} must be greater than zero"));
                    }
                    Ok(Duration::from_secs(secs))
                }
                None => Ok(default),
            }
        };

        Ok(Self {
            provider,
            gemini_api_key,
            openai_api_key,
            model: get("CHROMA_MODEL"),
            image_model: get("CHROMA_IMAGE_MODEL"),
            gemini_base_url: get("CHROMA_GEMINI_BASE_URL"),
            openai_base_url: get("CHROMA_OPENAI_BASE_URL"),
            image_base_url: get("CHROMA_IMAGE_BASE_URL"),
            timeout: secs("CHROMA_TIMEOUT_SECS", DEFAULT_PALETTE_TIMEOUT)?,
            image_timeout: secs("CHROMA_IMAGE_TIMEOUT_SECS", DEFAULT_IMAGE_TIMEOUT)?,
        })
    }

    /// Apply command line overrides on top of the environment.
    pub fn with_overrides(
        mut self,
        provider: Option<Provider>,
        model: Option<String>,
        timeout_secs: Option<u64>,
    ) -> Result<Self> {
        if let Some(provider) = provider {
            if provider != self.provider {
                // A model name only makes sense for the provider it was set for
                self.model = None;
            }
            self.provider = provider;
        }
        if let Some(model) = model {
            self.model = Some(model);
        }
        if let Some(secs) = timeout_secs {
            if secs == 0 {
                return Err(anyhow!("--timeout must be greater than zero"));
            }
            self.timeout = Duration::from_secs(secs);
        }
        Ok(self)
    }

    pub fn api_key(&self, provider: Provider) -> Option<&str> {
        match provider {
            Provider::Gemini => self.gemini_api_key.as_deref(),
            Provider::OpenAI => self.openai_api_key.as_deref(),
        }
    }

    /// Model the palette client will use.
    pub fn effective_model(&self) -> &str {
        match (&self.model, self.provider) {
            (Some(model), _) => model,
            (None, Provider::Gemini) => GeminiConfig::DEFAULT_MODEL,
            (None, Provider::OpenAI) => OpenAIConfig::DEFAULT_MODEL,
        }
    }

    pub fn palette_client(&self) -> Result<PaletteClient> {
        let key = self.api_key(self.provider).ok_or_else(|| {
            anyhow!(
                "{} is not set. Run 'chroma config api --provider {}' or export it.",
                self.provider.key_var(),
                self.provider
            )
        })?;

        let client = match self.provider {
            Provider::Gemini => {
                let mut config = GeminiConfig::new(key).with_model(self.effective_model());
                if let Some(url) = &self.gemini_base_url {
                    config = config.with_base_url(url);
                }
                PaletteClient::new(GeminiModel::new(config)?)
            }
            Provider::OpenAI => {
                let mut config = OpenAIConfig::new(key).with_model(self.effective_model());
                if let Some(url) = &self.openai_base_url {
                    config = config.with_base_url(url);
                }
                PaletteClient::new(OpenAIModel::new(config)?)
            }
        };

        Ok(client.with_timeout(self.timeout))
    }

    pub fn hero_client(&self) -> Result<HeroImageClient> {
        let key = self
            .openai_api_key
            .as_deref()
            .ok_or_else(|| anyhow!("OPENAI_API_KEY is not set; hero images need an image endpoint key"))?;

        let mut config = ImageConfig::new(key);
        if let Some(model) = &self.image_model {
            config = config.with_model(model);
        }
        if let Some(url) = &self.image_base_url {
            config = config.with_base_url(url);
        }
        Ok(HeroImageClient::new(config)?.with_timeout(self.image_timeout))
    }
}

/// Load env files without overriding variables that are already set.
/// Order (first wins): process env, `.chroma/env` (cwd or a parent),
/// `~/.chroma/env`, `.env` (cwd or a parent).
pub fn load_env_files() {
    let cwd = std::env::current_dir().ok();

    if let Some(path) = cwd.as_deref().and_then(|dir| find_upwards(dir, &Path::new(CONFIG_DIR).join("env"))) {
        let _ = dotenvy::from_path(&path);
    }
    if let Some(path) = global_env_path().filter(|p| p.exists()) {
        let _ = dotenvy::from_path(&path);
    }
    if let Some(path) = cwd.as_deref().and_then(|dir| find_upwards(dir, Path::new(".env"))) {
        let _ = dotenvy::from_path(&path);
    }
}

/// Nearest `start/relative`, `start/../relative`, ... that exists.
pub fn find_upwards(start: &Path, relative: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .take(MAX_WALK_UP)
        .map(|dir| dir.join(relative))
        .find(|candidate| candidate.is_file())
}

/// `~/.chroma/env`
pub fn global_env_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR).join("env"))
}

/// Show the first and last four characters of a key.
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}
