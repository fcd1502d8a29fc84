//! Provider implementations

pub mod gemini;
pub mod openai;

pub use gemini::GeminiModel;
pub use openai::OpenAIModel;
