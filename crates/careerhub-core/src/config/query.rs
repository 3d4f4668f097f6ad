//! Job listing query configuration.

use serde::{Deserialize, Serialize};

/// Settings for job listing queries on the public and recruiter pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Quiet period after the last search keystroke before a request fires.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Jobs per page on the public careers page.
    #[serde(default = "default_public_page_size")]
    pub public_page_size: u64,
    /// Jobs per page on the recruiter job management page.
    #[serde(default = "default_manage_page_size")]
    pub manage_page_size: u64,
    /// Currency shown when a job does not carry one.
    #[serde(default = "default_currency")]
    pub default_currency: String,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            public_page_size: default_public_page_size(),
            manage_page_size: default_manage_page_size(),
            default_currency: default_currency(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_public_page_size() -> u64 {
    15
}

fn default_manage_page_size() -> u64 {
    10
}

fn default_currency() -> String {
    "INR".to_string()
}
