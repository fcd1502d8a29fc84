//! Error types for observability crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ObservabilityError {
    /// The subscriber or exporter could not be installed
    #[error("Failed to initialize observability: {0}")]
    InitFailed(String),

    /// A log filter directive did not parse
    #[error("Invalid log filter {filter:?}: {message}")]
    InvalidFilter { filter: String, message: String },
}
