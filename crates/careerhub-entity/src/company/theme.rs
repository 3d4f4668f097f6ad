//! Careers page color theme.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use careerhub_core::AppError;

/// The four colors of a careers page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Accent color for buttons and highlights.
    #[serde(default = "default_primary")]
    pub primary_color: String,
    /// Secondary accent.
    #[serde(default = "default_secondary")]
    pub secondary_color: String,
    /// Body text color.
    #[serde(default = "default_text")]
    pub text_color: String,
    /// Page background color.
    #[serde(default = "default_background")]
    pub background_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_color: default_primary(),
            secondary_color: default_secondary(),
            text_color: default_text(),
            background_color: default_background(),
        }
    }
}

impl Theme {
    /// Read one color.
    pub fn get(&self, field: ThemeField) -> &str {
        match field {
            ThemeField::Primary => &self.primary_color,
            ThemeField::Secondary => &self.secondary_color,
            ThemeField::Text => &self.text_color,
            ThemeField::Background => &self.background_color,
        }
    }

    /// Replace one color after checking it is a `#rgb` or `#rrggbb` hex value.
    pub fn set(&mut self, field: ThemeField, value: &str) -> Result<(), AppError> {
        let value = value.trim();
        if !is_hex_color(value) {
            return Err(AppError::validation(format!(
                "Invalid color '{value}' for {field}: expected #rgb or #rrggbb"
            )));
        }
        let slot = match field {
            ThemeField::Primary => &mut self.primary_color,
            ThemeField::Secondary => &mut self.secondary_color,
            ThemeField::Text => &mut self.text_color,
            ThemeField::Background => &mut self.background_color,
        };
        *slot = value.to_lowercase();
        Ok(())
    }
}

fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

/// Selects one of the four theme colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeField {
    Primary,
    Secondary,
    Text,
    Background,
}

impl fmt::Display for ThemeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Primary => "primary_color",
            Self::Secondary => "secondary_color",
            Self::Text => "text_color",
            Self::Background => "background_color",
        };
        f.write_str(name)
    }
}

impl FromStr for ThemeField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().trim_end_matches("_color") {
            "primary" => Ok(Self::Primary),
            "secondary" => Ok(Self::Secondary),
            "text" => Ok(Self::Text),
            "background" => Ok(Self::Background),
            _ => Err(AppError::validation(format!(
                "Unknown theme field '{s}'. Expected one of: primary, secondary, text, background"
            ))),
        }
    }
}

fn default_primary() -> String {
    "#10b981".to_string()
}

fn default_secondary() -> String {
    "#404040".to_string()
}

fn default_text() -> String {
    "#ffffff".to_string()
}

fn default_background() -> String {
    "#0a0a0a".to_string()
}
