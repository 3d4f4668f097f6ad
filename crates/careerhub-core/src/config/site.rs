//! Public site configuration.

use serde::{Deserialize, Serialize};

/// Settings for the public-facing site (sitemap, robots, structured data).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Canonical base URL of the public site.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl SiteConfig {
    /// Join a path onto the base URL without doubling slashes.
    pub fn url_for(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path.is_empty() {
            return base.to_string();
        }
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

fn default_base_url() -> String {
    "https://yourdomain.com".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_joins_once() {
        let site = SiteConfig {
            base_url: "https://jobs.example.com/".to_string(),
        };
        assert_eq!(site.url_for("/acme/careers"), "https://jobs.example.com/acme/careers");
        assert_eq!(site.url_for(""), "https://jobs.example.com");
    }
}
