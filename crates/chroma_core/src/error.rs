use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChromaError {
    #[error("invalid color format: {0:?}")]
    InvalidColorFormat(String),

    #[error("invalid palette: {0}")]
    InvalidPalette(String),
}

pub type Result<T> = std::result::Result<T, ChromaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_color_error() {
        let err = ChromaError::InvalidColorFormat("#12".to_string());
        assert_eq!(err.to_string(), "invalid color format: \"#12\"");
    }

    #[test]
    fn test_invalid_palette_error() {
        let err = ChromaError::InvalidPalette("expected 6 colors, got 5".to_string());
        assert_eq!(err.to_string(), "invalid palette: expected 6 colors, got 5");
    }
}
