//! Tracing setup for the chroma tools.
//!
//! Console logs always go to stderr so that stdout stays free for command
//! output (JSON mode in particular). Spans are exported over OTLP only when
//! an endpoint is configured.
//!
//! ```no_run
//! use chroma_observability::{init, ObservabilityConfig};
//!
//! let config = ObservabilityConfig::new("chroma")
//!     .with_log_level("debug")
//!     .with_otlp_endpoint("http://localhost:4317");
//! init(config)?;
//!
//! tracing::info!("ready");
//! chroma_observability::shutdown();
//! # Ok::<(), chroma_observability::ObservabilityError>(())
//! ```
//!
//! # Environment Variables
//!
//! - `OTEL_SERVICE_NAME` - Service name
//! - `OTEL_SERVICE_VERSION` - Service version
//! - `OTEL_EXPORTER_OTLP_ENDPOINT` - OTLP endpoint
//! - `CHROMA_LOG` or `RUST_LOG` - Log level filter

pub mod config;
pub mod error;
pub mod telemetry;
pub mod tracing;

pub use config::ObservabilityConfig;
pub use error::ObservabilityError;
pub use telemetry::{init, shutdown};
pub use crate::tracing::{record_duration, record_error};
