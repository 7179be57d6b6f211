use crate::model::{FONT_PAIRINGS, PALETTE_SIZE};
use serde_json::{json, Value};

/// Style qualifiers appended to every logo prompt.
pub const LOGO_STYLE_SUFFIX: &str = "white background, high quality, vector style, minimal";

/// Natural-language instruction for the strategy model.
pub fn strategy_instruction(mission: &str, language: &str) -> String {
    format!(
        "Act as a world-class branding expert and graphic designer.\n\
         Based on the following company mission: \"{mission}\".\n\
         \n\
         Generate a complete brand identity in JSON format.\n\
         The response must include:\n\
         1. A creative name for the company (unless the mission states one explicitly).\n\
         2. A catchy tagline in {language}.\n\
         3. A refined one-sentence restatement of the mission in {language}.\n\
         4. A palette of exactly {colors} hexadecimal colors (#RRGGBB) with names and usage notes.\n\
         5. {fonts} Google Fonts pairings (header and body) with the reasoning behind each.\n\
         6. A very detailed, artistic prompt for generating a modern, minimalist logo. \
         The logo prompt must be written in English.",
        mission = mission.trim(),
        language = language,
        colors = PALETTE_SIZE,
        fonts = FONT_PAIRINGS,
    )
}

/// Response schema for the strategy call.
pub fn strategy_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "companyName": { "type": "STRING" },
            "tagline": { "type": "STRING" },
            "missionStatement": { "type": "STRING" },
            "colors": {
                "type": "ARRAY",
                "minItems": PALETTE_SIZE,
                "maxItems": PALETTE_SIZE,
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "hex": { "type": "STRING" },
                        "name": { "type": "STRING" },
                        "usage": { "type": "STRING" }
                    },
                    "required": ["hex", "name", "usage"]
                }
            },
            "fonts": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "header": { "type": "STRING" },
                        "body": { "type": "STRING" },
                        "reasoning": { "type": "STRING" }
                    },
                    "required": ["header", "body", "reasoning"]
                }
            },
            "logoPrompt": { "type": "STRING" }
        },
        "required": ["companyName", "tagline", "colors", "fonts", "logoPrompt"]
    })
}

pub fn logo_prompt(prompt: &str) -> String {
    format!("{}, {}", prompt.trim(), LOGO_STYLE_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_mentions_mission_and_counts() {
        let text = strategy_instruction("  eco-friendly coffee shop in Bogotá ", "Spanish");
        assert!(text.contains("\"eco-friendly coffee shop in Bogotá\""));
        assert!(text.contains("exactly 5 hexadecimal colors"));
        assert!(text.contains("2 Google Fonts pairings"));
        assert!(text.contains("tagline in Spanish"));
        assert!(text.contains("written in English"));
    }

    #[test]
    fn test_schema_required_fields() {
        let schema = strategy_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert_eq!(
            required,
            vec!["companyName", "tagline", "colors", "fonts", "logoPrompt"]
        );
        assert!(!required.contains(&"missionStatement"));
        assert_eq!(schema["properties"]["colors"]["maxItems"], 5);
    }

    #[test]
    fn test_logo_prompt_appends_style() {
        assert_eq!(
            logo_prompt("A coffee leaf "),
            "A coffee leaf, white background, high quality, vector style, minimal"
        );
    }
}
