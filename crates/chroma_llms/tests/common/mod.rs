//! Shared fixtures for the HTTP client tests.

#![allow(dead_code)]

use serde_json::{json, Value};

pub const API_KEY: &str = "test-key";

/// A well-formed six-role palette as the model would write it.
pub fn palette_json() -> Value {
    json!({
        "concept": "Nordic harbor at first light",
        "colors": [
            {"hex": "#F1F5F9", "name": "Frost", "role": "background", "description": "Clean and bright"},
            {"hex": "#0F172A", "name": "Deep Fjord", "role": "text", "description": "Strong contrast"},
            {"hex": "#1D4ED8", "name": "Harbor Blue", "role": "primary", "description": "Trustworthy anchor"},
            {"hex": "#475569", "name": "Granite", "role": "secondary", "description": "Grounding support"},
            {"hex": "#F59E0B", "name": "Lantern", "role": "accent-1", "description": "Warm call to action"},
            {"hex": "#10B981", "name": "Sea Glass", "role": "accent-2", "description": "Fresh variety"}
        ]
    })
}

/// Wrap answer text in a Gemini `generateContent` envelope.
pub fn gemini_envelope(text: &str) -> String {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
    .to_string()
}

/// Wrap answer text in an OpenAI chat completion envelope.
pub fn openai_envelope(text: &str) -> String {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": text},
            "finish_reason": "stop"
        }]
    })
    .to_string()
}

pub fn seeds(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
