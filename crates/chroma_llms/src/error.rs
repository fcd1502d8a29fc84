//! Error taxonomy for the generation clients.

use std::time::Duration;

use chroma_core::ChromaError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Service unreachable, or a non-2xx answer from the text model.
    #[error("transport error: {0}")]
    Transport(String),

    /// Body is not JSON or does not satisfy the palette shape.
    #[error("invalid response format: {0}")]
    ResponseFormat(String),

    /// Non-2xx from the image endpoint.
    #[error("image generation failed with status {status}: {message}")]
    ImageGeneration { status: u16, message: String },

    /// 2xx from the image endpoint without `data[0].b64_json`.
    #[error("image response contained no image data")]
    NoImageData,

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("request cancelled")]
    Cancelled,

    #[error("missing API key for provider: {0}")]
    MissingApiKey(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl Error {
    pub fn transport(message: impl Into<String>) -> Self {
        Error::Transport(message.into())
    }

    pub fn response_format(message: impl Into<String>) -> Self {
        Error::ResponseFormat(message.into())
    }

    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::ImageGeneration { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Image-side failures leave an already resolved palette usable.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::ImageGeneration { .. } | Error::NoImageData)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err.to_string())
    }
}

impl From<ChromaError> for Error {
    fn from(err: ChromaError) -> Self {
        Error::ResponseFormat(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_generation_error_carries_status() {
        let err = Error::ImageGeneration {
            status: 429,
            message: "rate limited".into(),
        };
        assert_eq!(err.status(), Some(429));
        assert_eq!(
            err.to_string(),
            "image generation failed with status 429: rate limited"
        );
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_palette_errors_are_not_recoverable() {
        assert!(!Error::response_format("bad").is_recoverable());
        assert!(!Error::transport("down").is_recoverable());
        assert!(!Error::Timeout(Duration::from_secs(1)).is_recoverable());
        assert!(Error::NoImageData.is_recoverable());
    }

    #[test]
    fn test_core_error_maps_to_response_format() {
        let err = Error::from(ChromaError::InvalidPalette("expected 6 colors, got 2".into()));
        assert!(matches!(err, Error::ResponseFormat(ref m) if m.contains("got 2")));
    }
}
