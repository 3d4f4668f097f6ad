//! Uploaded asset references (logo, banner).

use serde::{Deserialize, Serialize};

/// A reference to a file held in object storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Public URL or storage key.
    #[serde(default)]
    pub url: String,
    /// Original file name.
    #[serde(default)]
    pub name: String,
    /// MIME type of the file.
    #[serde(default, alias = "mime_type")]
    pub mimetype: String,
}

impl Asset {
    /// Whether the asset points at anything.
    pub fn is_empty(&self) -> bool {
        self.url.trim().is_empty()
    }
}
