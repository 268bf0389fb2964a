//! Stylesheet for the generated documentation
//!
//! A stylesheet names the colors of the documentation chrome and the font
//! families to try, in order. Any color a stylesheet leaves out falls back to
//! the built-in palette.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::scene::FontName;

/// Errors that can occur when loading or parsing stylesheets
#[derive(Error, Debug)]
pub enum StylesheetError {
    #[error("Failed to read stylesheet file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse stylesheet TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid color '{value}' for '{key}': expected #RRGGBB")]
    InvalidColor { key: String, value: String },
    #[error("Unknown color '{0}' in [colors]")]
    UnknownColor(String),
    #[error("Font family '{0}' is listed more than once")]
    DuplicateFamily(String),
}

/// Named colors of the documentation chrome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    Background,
    Section,
    TableHeader,
    DoBackground,
    DontBackground,
    DoText,
    DontText,
    Border,
    Text,
    Placeholder,
    SubtleText,
    Highlight,
}

impl ColorToken {
    pub const ALL: [ColorToken; 12] = [
        ColorToken::Background,
        ColorToken::Section,
        ColorToken::TableHeader,
        ColorToken::DoBackground,
        ColorToken::DontBackground,
        ColorToken::DoText,
        ColorToken::DontText,
        ColorToken::Border,
        ColorToken::Text,
        ColorToken::Placeholder,
        ColorToken::SubtleText,
        ColorToken::Highlight,
    ];

    /// Key used in the `[colors]` table
    pub fn key(self) -> &'static str {
        match self {
            ColorToken::Background => "background",
            ColorToken::Section => "section",
            ColorToken::TableHeader => "table-header",
            ColorToken::DoBackground => "do-background",
            ColorToken::DontBackground => "dont-background",
            ColorToken::DoText => "do-text",
            ColorToken::DontText => "dont-text",
            ColorToken::Border => "border",
            ColorToken::Text => "text",
            ColorToken::Placeholder => "placeholder",
            ColorToken::SubtleText => "subtle-text",
            ColorToken::Highlight => "highlight",
        }
    }

    /// Built-in palette value
    pub fn default_hex(self) -> &'static str {
        match self {
            ColorToken::Background => "#FFFFFF",
            ColorToken::Section => "#FCFCF8",
            ColorToken::TableHeader => "#E6E6E6",
            ColorToken::DoBackground => "#F0F8ED",
            ColorToken::DontBackground => "#FDF1F1",
            ColorToken::DoText => "#448131",
            ColorToken::DontText => "#CF1717",
            ColorToken::Border => "#D0D0D0",
            ColorToken::Text => "#1A1A1A",
            ColorToken::Placeholder => "#808080",
            ColorToken::SubtleText => "#666666",
            ColorToken::Highlight => "#0D69D4",
        }
    }
}

/// One font family with the style used for each text role
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FontFamily {
    pub family: String,
    pub title: String,
    pub heading: String,
    pub subheading: String,
    pub body: String,
    pub bold: String,
    pub medium: String,
}

impl FontFamily {
    fn new(family: &str, [title, heading, subheading, body, bold, medium]: [&str; 6]) -> Self {
        Self {
            family: family.to_string(),
            title: title.to_string(),
            heading: heading.to_string(),
            subheading: subheading.to_string(),
            body: body.to_string(),
            bold: bold.to_string(),
            medium: medium.to_string(),
        }
    }

    /// Distinct fonts that must be loaded before this family can be used
    pub fn required_fonts(&self) -> Vec<FontName> {
        let mut fonts: Vec<FontName> = vec![];
        for style in [
            &self.title,
            &self.heading,
            &self.subheading,
            &self.body,
            &self.bold,
            &self.medium,
        ] {
            let font = FontName::new(self.family.as_str(), style.as_str());
            if !fonts.contains(&font) {
                fonts.push(font);
            }
        }
        fonts
    }
}

/// Font fallback chain used when none is configured
pub fn default_font_families() -> Vec<FontFamily> {
    vec![
        FontFamily::new(
            "Manrope",
            ["Bold", "Bold", "SemiBold", "Regular", "SemiBold", "Medium"],
        ),
        FontFamily::new(
            "Inter",
            ["Bold", "Bold", "Semi Bold", "Regular", "Semi Bold", "Medium"],
        ),
        FontFamily::new(
            "Roboto",
            ["Bold", "Bold", "Medium", "Regular", "Medium", "Medium"],
        ),
    ]
}

/// Colors and fonts for the documentation
#[derive(Debug, Clone)]
pub struct Stylesheet {
    /// Optional name for the stylesheet
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Color overrides: token key -> hex color
    pub colors: HashMap<String, String>,
    /// Font families to try, in order
    pub fonts: Vec<FontFamily>,
}

/// TOML structure for deserializing stylesheets
#[derive(Deserialize)]
struct TomlStylesheet {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    colors: HashMap<String, String>,
    fonts: Option<Vec<FontFamily>>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

impl Stylesheet {
    /// Load stylesheet from TOML file
    pub fn from_file(path: &Path) -> Result<Self, StylesheetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load stylesheet from TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, StylesheetError> {
        let parsed: TomlStylesheet = toml::from_str(content)?;

        for (key, value) in &parsed.colors {
            if !ColorToken::ALL.iter().any(|token| token.key() == key) {
                return Err(StylesheetError::UnknownColor(key.clone()));
            }
            if !is_hex_color(value) {
                return Err(StylesheetError::InvalidColor {
                    key: key.clone(),
                    value: value.clone(),
                });
            }
        }

        let fonts = match parsed.fonts {
            Some(fonts) if !fonts.is_empty() => fonts,
            _ => default_font_families(),
        };
        for (i, font) in fonts.iter().enumerate() {
            if fonts[..i].iter().any(|f| f.family == font.family) {
                return Err(StylesheetError::DuplicateFamily(font.family.clone()));
            }
        }

        Ok(Stylesheet {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            colors: parsed.colors,
            fonts,
        })
    }

    /// Hex value of a color token, falling back to the built-in palette
    pub fn color(&self, token: ColorToken) -> &str {
        self.colors
            .get(token.key())
            .map(|s| s.as_str())
            .unwrap_or_else(|| token.default_hex())
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self {
            name: None,
            description: None,
            colors: HashMap::new(),
            fonts: default_font_families(),
        }
    }
}
