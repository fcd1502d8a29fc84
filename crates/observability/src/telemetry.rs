//! Subscriber installation: env filter, stderr console layer and an optional
//! OTLP span exporter (opentelemetry 0.31).

use once_cell::sync::OnceCell;
use opentelemetry::{global, trace::TracerProvider, KeyValue};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::trace::SdkTracerProvider;
use opentelemetry_sdk::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::config::ObservabilityConfig;
use crate::error::ObservabilityError;

// Kept for flushing on shutdown
static TRACER_PROVIDER: OnceCell<SdkTracerProvider> = OnceCell::new();

/// Parse the configured filter directive.
pub fn build_filter(config: &ObservabilityConfig) -> Result<EnvFilter, ObservabilityError> {
    let directive = config.effective_log_level();
    EnvFilter::try_new(directive).map_err(|e| ObservabilityError::InvalidFilter {
        filter: directive.to_string(),
        message: e.to_string(),
    })
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(config: ObservabilityConfig) -> Result<(), ObservabilityError> {
    let env_filter = build_filter(&config)?;

    let mut attributes = vec![KeyValue::new("service.name", config.service_name.clone())];
    if let Some(version) = &config.service_version {
        attributes.push(KeyValue::new("service.version", version.clone()));
    }
    for (key, value) in &config.resource_attributes {
        attributes.push(KeyValue::new(key.clone(), value.clone()));
    }
    let resource = Resource::builder().with_attributes(attributes).build();

    let fmt_layer = config.enable_console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
    });

    let mut otlp_failure = None;
    let otel_layer = match &config.otlp_endpoint {
        Some(endpoint) => match build_otlp_tracer_provider(&config.service_name, endpoint, resource) {
            Ok((tracer, provider)) => {
                global::set_tracer_provider(provider.clone());
                let _ = TRACER_PROVIDER.set(provider);
                Some(OpenTelemetryLayer::new(tracer))
            }
            Err(e) => {
                otlp_failure = Some(e);
                None
            }
        },
        None => None,
    };

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .with(otel_layer)
        .try_init()
        .map_err(|e| ObservabilityError::InitFailed(e.to_string()))?;

    // Logged after install so the messages are not lost
    match (&config.otlp_endpoint, otlp_failure) {
        (Some(endpoint), None) => tracing::info!(
            service.name = %config.service_name,
            otlp.endpoint = %endpoint,
            "OTLP tracing enabled"
        ),
        (Some(endpoint), Some(e)) => tracing::warn!(
            endpoint = %endpoint,
            error = %e,
            "Failed to initialize OTLP export, falling back to console-only tracing"
        ),
        (None, _) => tracing::debug!(service.name = %config.service_name, "Tracing initialized"),
    }

    Ok(())
}

fn build_otlp_tracer_provider(
    service_name: &str,
    endpoint: &str,
    resource: Resource,
) -> Result<(opentelemetry_sdk::trace::SdkTracer, SdkTracerProvider), ObservabilityError> {
    let span_exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint.to_string())
        .build()
        .map_err(|e| ObservabilityError::InitFailed(e.to_string()))?;

    let provider = SdkTracerProvider::builder()
        .with_batch_exporter(span_exporter)
        .with_resource(resource)
        .build();

    let tracer = provider.tracer(service_name.to_string());
    Ok((tracer, provider))
}

/// Flush and stop the OTLP exporter, if one was started.
pub fn shutdown() {
    if let Some(provider) = TRACER_PROVIDER.get() {
        if let Err(e) = provider.shutdown() {
            tracing::debug!(error = %e, "Tracer provider shutdown reported an error");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_accepts_directives() {
        let config = ObservabilityConfig::default().with_log_level("chroma_llms=debug,warn");
        assert!(build_filter(&config).is_ok());
        assert!(build_filter(&ObservabilityConfig::default()).is_ok());
    }

    #[test]
    fn test_build_filter_rejects_garbage() {
        let config = ObservabilityConfig::default().with_log_level("chroma_llms=[[[");
        let err = build_filter(&config).unwrap_err();
        assert!(matches!(err, ObservabilityError::InvalidFilter { .. }));
    }

    #[test]
    fn test_shutdown_without_exporter_is_noop() {
        shutdown();
    }
}
