//! Content sections composing a careers page body.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use careerhub_core::AppError;
use careerhub_core::types::id::SectionId;

/// Type tag of a content section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Hero,
    About,
    Life,
    Perks,
    Custom,
}

impl SectionKind {
    /// All section kinds in the order the builder offers them.
    pub const ALL: [SectionKind; 5] = [
        Self::Hero,
        Self::About,
        Self::Life,
        Self::Perks,
        Self::Custom,
    ];

    /// Return the wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Life => "life",
            Self::Perks => "perks",
            Self::Custom => "custom",
        }
    }

    /// Title given to a freshly added section, e.g. `Perks`.
    pub fn default_title(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                AppError::validation(format!(
                    "Unknown section type '{s}'. Expected one of: hero, about, life, perks, custom"
                ))
            })
    }
}

/// A named, ordered content block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Server-assigned identifier; absent until the company is saved.
    #[serde(
        rename = "_id",
        alias = "id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<SectionId>,
    /// Type tag.
    #[serde(rename = "type")]
    pub kind: SectionKind,
    /// Heading shown above the content.
    #[serde(default)]
    pub title: String,
    /// Rich-text body (HTML).
    #[serde(default)]
    pub content: String,
    /// 1-based display position.
    #[serde(default)]
    pub order: u32,
}

impl Section {
    /// A new unsaved section of `kind` at position `order`.
    pub fn new(kind: SectionKind, order: u32) -> Self {
        Self {
            id: None,
            kind,
            title: kind.default_title(),
            content: String::new(),
            order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_section_title_is_capitalized_kind() {
        let section = Section::new(SectionKind::Perks, 3);
        assert_eq!(section.title, "Perks");
        assert_eq!(section.order, 3);
        assert!(section.id.is_none());
    }

    #[test]
    fn test_section_wire_format() {
        let section: Section = serde_json::from_str(
            r#"{"_id":"s1","type":"about","title":"About us","content":"<p>Hi</p>","order":2}"#,
        )
        .unwrap();
        assert_eq!(section.kind, SectionKind::About);
        assert_eq!(section.id.as_ref().map(|id| id.as_str()), Some("s1"));

        let unsaved = serde_json::to_value(Section::new(SectionKind::Hero, 1)).unwrap();
        assert!(unsaved.get("_id").is_none());
        assert_eq!(unsaved["type"], "hero");
    }

    #[test]
    fn test_kind_parse_is_case_insensitive() {
        assert_eq!("LIFE".parse::<SectionKind>().unwrap(), SectionKind::Life);
        assert!("footer".parse::<SectionKind>().is_err());
    }
}
