//! Prompt text and the JSON schema the text model must answer with.

use chroma_core::{ColorInfo, ColorRole, PALETTE_SIZE};
use serde_json::{json, Value};

/// Instruction for the text model, embedding the seeds and the six roles.
pub fn build_palette_prompt<S: AsRef<str>>(seeds: &[S]) -> String {
    let seeds = seeds
        .iter()
        .map(|s| s.as_ref().trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    let mut parts = Vec::with_capacity(PALETTE_SIZE + 3);
    parts.push(format!(
        "You are a senior UI/UX designer. Build a professional website color palette from these seed colors: {seeds}."
    ));
    parts.push(format!(
        "The palette must contain exactly {PALETTE_SIZE} colors, one for each of these roles:"
    ));
    for (i, role) in ColorRole::ALL.iter().enumerate() {
        parts.push(format!("{}. '{}' ({})", i + 1, role.as_str(), role.guidance()));
    }
    parts.push(
        "Make the colors modern, accessible and harmonious. Give each color a creative name and a short reason for its role, and describe the overall concept of the palette."
            .into(),
    );
    parts.join("\n")
}

/// Schema for `{concept, colors[6]}`. Standard JSON Schema; providers that
/// speak another dialect convert it.
pub fn palette_schema() -> Value {
    let roles: Vec<&str> = ColorRole::ALL.iter().map(|r| r.as_str()).collect();
    json!({
        "type": "object",
        "properties": {
            "concept": {
                "type": "string",
                "description": "A brief professional description of the palette vibe."
            },
            "colors": {
                "type": "array",
                "minItems": PALETTE_SIZE,
                "maxItems": PALETTE_SIZE,
                "items": {
                    "type": "object",
                    "properties": {
                        "hex": { "type": "string", "description": "Hexadecimal color code with #" },
                        "name": { "type": "string", "description": "A creative name for the color" },
                        "role": { "type": "string", "enum": roles },
                        "description": { "type": "string", "description": "Why this color was chosen for this role" }
                    },
                    "required": ["hex", "name", "role", "description"],
                    "additionalProperties": false
                }
            }
        },
        "required": ["concept", "colors"],
        "additionalProperties": false
    })
}

/// Prompt for the hero background, naming every color and the concept.
pub fn build_hero_prompt(colors: &[ColorInfo], concept: &str) -> String {
    let swatches = colors
        .iter()
        .map(|c| format!("{} ({}) as {}", c.name, c.hex, c.role))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Create an abstract, high-end hero background image for a modern website. \
         Visual concept: {}. Compose it strictly from this color palette: {swatches}. \
         Soft gradients and geometric forms, generous negative space, no text, no logos, no people.",
        concept.trim()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_prompt_lists_seeds_and_roles() {
        let prompt = build_palette_prompt(&["  teal ", "#ff8800", ""]);
        assert!(prompt.contains("seed colors: teal, #ff8800."));
        for role in ColorRole::ALL {
            assert!(prompt.contains(&format!("'{}'", role.as_str())), "{role}");
        }
        assert!(prompt.contains("1. 'background'"));
        assert!(prompt.contains("6. 'accent-2'"));
    }

    #[test]
    fn test_schema_shape() {
        let schema = palette_schema();
        assert_eq!(schema["required"], json!(["concept", "colors"]));
        let items = &schema["properties"]["colors"]["items"];
        assert_eq!(items["required"], json!(["hex", "name", "role", "description"]));
        assert_eq!(
            items["properties"]["role"]["enum"],
            json!(["background", "text", "primary", "secondary", "accent-1", "accent-2"])
        );
        assert_eq!(schema["properties"]["colors"]["maxItems"], 6);
    }

    #[test]
    fn test_hero_prompt_mentions_every_color() {
        let colors = vec![
            ColorInfo::new("#112233", "Midnight", ColorRole::Background, "deep"),
            ColorInfo::new("#ffcc00", "Saffron", ColorRole::Accent1, "bright"),
        ];
        let prompt = build_hero_prompt(&colors, " Nocturnal citrus ");
        assert!(prompt.contains("Midnight (#112233) as background"));
        assert!(prompt.contains("Saffron (#ffcc00) as accent-1"));
        assert!(prompt.contains("Visual concept: Nocturnal citrus."));
    }
}
