//! Client session persistence configuration.

use serde::{Deserialize, Serialize};

/// Where the signed-in session is persisted between runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Path of the JSON file holding token, user and company.
    #[serde(default = "default_path")]
    pub path: String,
    /// Minimum password length accepted at registration.
    #[serde(default = "default_password_min_length")]
    pub password_min_length: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            password_min_length: default_password_min_length(),
        }
    }
}

fn default_path() -> String {
    "data/session.json".to_string()
}

fn default_password_min_length() -> usize {
    6
}
