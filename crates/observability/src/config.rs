//! Configuration for observability/telemetry

use serde::{Deserialize, Serialize};

/// Default service name reported on exported spans.
pub const DEFAULT_SERVICE_NAME: &str = "chroma";

/// Filter used when neither the config nor the environment names one.
/// Kept quiet so command output is not drowned in library logs.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    #[serde(default = "default_service_name")]
    pub service_name: String,

    #[serde(default)]
    pub service_version: Option<String>,

    /// OTLP gRPC endpoint, e.g. `http://localhost:4317`. No export when unset.
    #[serde(default)]
    pub otlp_endpoint: Option<String>,

    /// Write formatted logs to stderr.
    #[serde(default = "default_true")]
    pub enable_console: bool,

    /// `EnvFilter` directive such as `info` or `chroma_llms=debug`.
    #[serde(default)]
    pub log_level: Option<String>,

    #[serde(default)]
    pub resource_attributes: Vec<(String, String)>,
}

fn default_service_name() -> String {
    DEFAULT_SERVICE_NAME.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            service_version: None,
            otlp_endpoint: None,
            enable_console: true,
            log_level: None,
            resource_attributes: Vec::new(),
        }
    }
}

impl ObservabilityConfig {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.service_version = Some(version.into());
        self
    }

    pub fn with_otlp_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.otlp_endpoint = Some(endpoint.into());
        self
    }

    pub fn with_console(mut self, enable: bool) -> Self {
        self.enable_console = enable;
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    pub fn with_resource_attribute(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.resource_attributes.push((key.into(), value.into()));
        self
    }

    /// Build from environment variables
    ///
    /// Reads:
    /// - `OTEL_SERVICE_NAME` → service_name
    /// - `OTEL_SERVICE_VERSION` → service_version
    /// - `OTEL_EXPORTER_OTLP_ENDPOINT` → otlp_endpoint
    /// - `CHROMA_LOG` or `RUST_LOG` → log_level
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            service_name: non_empty("OTEL_SERVICE_NAME").unwrap_or_else(default_service_name),
            service_version: non_empty("OTEL_SERVICE_VERSION"),
            otlp_endpoint: non_empty("OTEL_EXPORTER_OTLP_ENDPOINT"),
            enable_console: true,
            log_level: non_empty("CHROMA_LOG").or_else(|| non_empty("RUST_LOG")),
            resource_attributes: Vec::new(),
        }
    }

    /// The filter directive that [`init`](crate::init) will install.
    pub fn effective_log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}
