//! Response shaping: raw model text into a validated [`PaletteDraft`].

use chroma_core::PaletteDraft;

use crate::error::{Error, Result};

/// Parse and validate the model's JSON answer. Tolerates surrounding
/// whitespace and a markdown code fence; anything else that is not a complete
/// six-role palette is a [`Error::ResponseFormat`].
pub fn parse_palette_response(raw: &str) -> Result<PaletteDraft> {
    let body = strip_code_fence(raw.trim());
    if body.is_empty() {
        return Err(Error::response_format("empty response"));
    }

    let draft: PaletteDraft = serde_json::from_str(body)
        .map_err(|e| Error::response_format(format!("palette JSON: {e}")))?;
    draft.validate()?;
    Ok(draft.normalized())
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop an info string such as `json` up to the first newline.
    let rest = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest,
    };
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
