//! Careers page publication state.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Whether a company's careers page is publicly visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PublicationState {
    /// Only visible to the owner.
    #[default]
    Draft,
    /// Visible to everyone, along with its jobs.
    Published,
}

impl PublicationState {
    /// The opposite state.
    pub fn toggled(self) -> Self {
        match self {
            Self::Draft => Self::Published,
            Self::Published => Self::Draft,
        }
    }

    /// Whether the page and its jobs may be shown publicly.
    pub fn is_public(self) -> bool {
        self == Self::Published
    }

    /// Label of the button that flips this state.
    pub fn action_label(self) -> &'static str {
        match self {
            Self::Draft => "Publish",
            Self::Published => "Unpublish",
        }
    }
}

impl fmt::Display for PublicationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Draft => f.write_str("DRAFT"),
            Self::Published => f.write_str("PUBLISHED"),
        }
    }
}

// Older records store the flag as a boolean.
impl<'de> Deserialize<'de> for PublicationState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Name(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Flag(true) => Ok(Self::Published),
            Raw::Flag(false) => Ok(Self::Draft),
            Raw::Name(name) => match name.to_uppercase().as_str() {
                "PUBLISHED" => Ok(Self::Published),
                "DRAFT" => Ok(Self::Draft),
                other => Err(serde::de::Error::unknown_variant(
                    other,
                    &["DRAFT", "PUBLISHED"],
                )),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_once() {
        assert_eq!(PublicationState::Draft.toggled(), PublicationState::Published);
        assert_eq!(PublicationState::Draft.toggled().toggled(), PublicationState::Draft);
    }

    #[test]
    fn test_accepts_boolean_and_names() {
        let state: PublicationState = serde_json::from_str("true").unwrap();
        assert!(state.is_public());
        let state: PublicationState = serde_json::from_str("\"draft\"").unwrap();
        assert_eq!(state, PublicationState::Draft);
        assert!(serde_json::from_str::<PublicationState>("\"LIVE\"").is_err());
    }
}
