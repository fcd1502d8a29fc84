//! OpenAI-compatible chat completions provider using `json_schema` structured output.

mod provider;
mod types;

pub use provider::OpenAIModel;
pub use types::{OpenAIConfig, OpenAIRequest, OpenAIResponse};
