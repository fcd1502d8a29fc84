//! Span helpers for calls to hosted models.

/// Span around one call to a hosted model. `duration_ms` and the error
/// fields start empty and are filled by [`record_duration`] and
/// [`record_error`].
///
/// ```rust
/// use chroma_observability::provider_span;
///
/// let span = provider_span!("gemini", "generate_palette");
/// let _guard = span.enter();
/// ```
#[macro_export]
macro_rules! provider_span {
    ($provider:expr, $operation:expr) => {
        tracing::info_span!(
            "provider.call",
            provider = $provider,
            operation = $operation,
            duration_ms = tracing::field::Empty,
            error = tracing::field::Empty,
            error.message = tracing::field::Empty,
        )
    };
}

/// Mark the current span as failed and log the error.
pub fn record_error<E: std::error::Error>(error: &E) {
    let span = tracing::Span::current();
    span.record("error", true);
    span.record("error.message", error.to_string());
    tracing::warn!(error = %error, "Operation failed");
}

/// Record elapsed milliseconds under `key` on the current span.
pub fn record_duration(key: &str, duration: std::time::Duration) {
    let span = tracing::Span::current();
    span.record(key, u64::try_from(duration.as_millis()).unwrap_or(u64::MAX));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[derive(Debug)]
    struct Boom;

    impl std::fmt::Display for Boom {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("boom")
        }
    }

    impl std::error::Error for Boom {}

    #[test]
    fn test_helpers_work_inside_provider_span() {
        let span = crate::provider_span!("gemini", "generate_palette");
        let _guard = span.enter();
        record_duration("duration_ms", Duration::from_millis(42));
        record_error(&Boom);
    }

    #[test]
    fn test_helpers_work_without_span() {
        record_duration("duration_ms", Duration::from_secs(1));
        record_error(&Boom);
    }
}
