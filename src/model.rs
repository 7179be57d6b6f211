use crate::media::EmbeddedImage;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Number of colors a generated palette must contain.
pub const PALETTE_SIZE: usize = 5;

/// Number of font pairings requested from the strategy model.
pub const FONT_PAIRINGS: usize = 2;

fn hex_pattern() -> &'static Regex {
    static HEX: OnceLock<Regex> = OnceLock::new();
    HEX.get_or_init(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("hex color pattern is valid"))
}

/// Returns true for `#RRGGBB` color codes.
pub fn is_hex_color(value: &str) -> bool {
    hex_pattern().is_match(value)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSwatch {
    pub hex: String,
    pub name: String,
    pub usage: String,
}

impl ColorSwatch {
    pub fn new(hex: impl Into<String>, name: impl Into<String>, usage: impl Into<String>) -> Self {
        Self {
            hex: hex.into(),
            name: name.into(),
            usage: usage.into(),
        }
    }

    /// Adds the leading `#` models sometimes drop and trims whitespace.
    pub fn normalize(&mut self) {
        let trimmed = self.hex.trim();
        self.hex = if trimmed.starts_with('#') {
            trimmed.to_string()
        } else {
            format!("#{}", trimmed)
        };
    }

    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        if !is_hex_color(&self.hex) {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&self.hex[range], 16).ok();
        Some((channel(1..3)?, channel(3..5)?, channel(5..7)?))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontPairing {
    pub header: String,
    pub body: String,
    pub reasoning: String,
}

impl FontPairing {
    /// Google Fonts identifiers may carry weights (`Lato:400,700`); the family is the part before `:`.
    pub fn header_family(&self) -> &str {
        family_name(&self.header)
    }

    pub fn body_family(&self) -> &str {
        family_name(&self.body)
    }
}

fn family_name(font: &str) -> &str {
    font.split(':').next().unwrap_or(font).trim()
}

/// The structured part of a brand identity, as returned by the strategy model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandStrategy {
    pub company_name: String,
    #[serde(default)]
    pub mission_statement: String,
    pub tagline: String,
    pub colors: Vec<ColorSwatch>,
    pub fonts: Vec<FontPairing>,
    pub logo_prompt: String,
}

impl BrandStrategy {
    /// Fills in defaults and checks the palette/typography shape.
    ///
    /// A blank mission statement falls back to the mission the user typed.
    pub fn normalize(mut self, mission: &str) -> Result<Self, String> {
        if self.mission_statement.trim().is_empty() {
            self.mission_statement = mission.trim().to_string();
        }

        for color in &mut self.colors {
            color.normalize();
        }

        if self.colors.len() != PALETTE_SIZE {
            return Err(format!(
                "expected {} colors, got {}",
                PALETTE_SIZE,
                self.colors.len()
            ));
        }
        if let Some(bad) = self.colors.iter().find(|c| !is_hex_color(&c.hex)) {
            return Err(format!("malformed hex color {:?}", bad.hex));
        }
        if self.fonts.is_empty() {
            return Err("no font pairings".to_string());
        }
        if self.company_name.trim().is_empty() || self.logo_prompt.trim().is_empty() {
            return Err("missing company name or logo prompt".to_string());
        }

        Ok(self)
    }
}

/// A complete brand identity: strategy plus the generated logo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandIdentity {
    pub company_name: String,
    pub mission_statement: String,
    pub tagline: String,
    pub colors: Vec<ColorSwatch>,
    pub fonts: Vec<FontPairing>,
    pub logo_prompt: String,
    #[serde(skip)]
    pub logo: Option<EmbeddedImage>,
}

impl BrandIdentity {
    pub fn from_strategy(strategy: BrandStrategy) -> Self {
        Self {
            company_name: strategy.company_name,
            mission_statement: strategy.mission_statement,
            tagline: strategy.tagline,
            colors: strategy.colors,
            fonts: strategy.fonts,
            logo_prompt: strategy.logo_prompt,
            logo: None,
        }
    }

    pub fn with_logo(mut self, logo: EmbeddedImage) -> Self {
        self.logo = Some(logo);
        self
    }

    /// File-name friendly form of the company name.
    pub fn slug(&self) -> String {
        let mut slug = String::new();
        for c in self.company_name.chars() {
            if c.is_alphanumeric() {
                slug.extend(c.to_lowercase());
            } else if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        }
        let slug = slug.trim_end_matches('-').to_string();
        if slug.is_empty() {
            "brand".to_string()
        } else {
            slug
        }
    }

    /// Plain-text summary used for the clipboard.
    pub fn palette_summary(&self) -> String {
        let mut text = format!("{} — {}\n", self.company_name, self.tagline);
        for color in &self.colors {
            text.push_str(&format!("{} {} ({})\n", color.hex, color.name, color.usage));
        }
        text
    }
}
