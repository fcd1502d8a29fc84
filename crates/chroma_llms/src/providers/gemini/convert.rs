//! Conversion between the shared schema/prompt and Gemini wire types

use serde_json::{Map, Value};

use super::types::{
    GeminiContent, GeminiGenerationConfig, GeminiPart, GeminiRequest, GeminiResponse,
};
use crate::error::{Error, Result};

/// Build a `generateContent` request asking for JSON matching `schema`.
pub fn to_gemini_request(prompt: &str, schema: &Value) -> GeminiRequest {
    GeminiRequest {
        contents: vec![GeminiContent {
            role: Some("user".to_string()),
            parts: vec![GeminiPart {
                text: Some(prompt.to_string()),
            }],
        }],
        generation_config: GeminiGenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: to_gemini_schema(schema),
        },
    }
}

/// Gemini's schema dialect: upper-case type names, no `additionalProperties`.
pub fn to_gemini_schema(schema: &Value) -> Value {
    match schema {
        Value::Object(obj) => {
            let mut out = Map::with_capacity(obj.len());
            for (key, value) in obj {
                match (key.as_str(), value) {
                    ("additionalProperties", _) => {}
                    ("type", Value::String(t)) => {
                        out.insert(key.clone(), Value::String(t.to_uppercase()));
                    }
                    ("enum", _) | ("required", _) => {
                        out.insert(key.clone(), value.clone());
                    }
                    _ => {
                        out.insert(key.clone(), to_gemini_schema(value));
                    }
                }
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.iter().map(to_gemini_schema).collect()),
        other => other.clone(),
    }
}

/// Concatenate the text parts of the first candidate.
pub fn from_gemini_response(resp: GeminiResponse) -> Result<String> {
    if let Some(reason) = resp.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(Error::response_format(format!("prompt blocked: {reason}")));
    }

    let candidate = resp
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| Error::response_format("response has no candidates"))?;

    let text: String = candidate
        .content
        .map(|c| c.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|p| p.text)
        .collect();

    if text.trim().is_empty() {
        let reason = candidate.finish_reason.unwrap_or_else(|| "unknown".to_string());
        return Err(Error::response_format(format!(
            "candidate has no text (finish reason: {reason})"
        )));
    }
    Ok(text)
}
