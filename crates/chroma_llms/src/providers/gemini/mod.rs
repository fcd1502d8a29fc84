//! Gemini provider module
//!
//! Implements [`TextModel`](crate::TextModel) over the `generateContent` REST
//! endpoint with a response schema.

mod convert;
mod provider;
mod types;

pub use provider::GeminiModel;
pub use types::{GeminiConfig, GeminiRequest, GeminiResponse};
