//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section. Every field carries a serde default, so a missing file still
//! produces a usable configuration.

pub mod api;
pub mod logging;
pub mod query;
pub mod session;
pub mod site;

use serde::{Deserialize, Serialize};

pub use self::api::ApiConfig;
pub use self::logging::{LogFormat, LoggingConfig};
pub use self::query::QueryConfig;
pub use self::session::SessionConfig;
pub use self::site::SiteConfig;

use crate::error::AppError;

/// Environment variable prefix for configuration overrides.
const ENV_PREFIX: &str = "CAREERHUB";

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Remote REST API settings.
    #[serde(default)]
    pub api: ApiConfig,
    /// Job listing query settings.
    #[serde(default)]
    pub query: QueryConfig,
    /// Client session persistence settings.
    #[serde(default)]
    pub session: SessionConfig,
    /// Public site settings (sitemap, robots, structured data).
    #[serde(default)]
    pub site: SiteConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a single TOML file plus environment variables.
    ///
    /// The file is optional. Environment variables prefixed with
    /// `CAREERHUB__` override file values (e.g. `CAREERHUB__API__BASE_URL`).
    pub fn load(path: &str) -> Result<Self, AppError> {
        Self::load_layered(path, None)
    }

    /// Load configuration from a base file, an optional environment overlay
    /// (`config/{env}.toml`), and environment variables, in that order.
    pub fn load_layered(path: &str, env: Option<&str>) -> Result<Self, AppError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name(path).required(false));

        if let Some(env) = env {
            builder = builder
                .add_source(config::File::with_name(&format!("config/{env}")).required(false));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints that serde defaults cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.query.public_page_size == 0 || self.query.manage_page_size == 0 {
            return Err(AppError::configuration("Page sizes must be at least 1"));
        }

        for (name, url) in [
            ("api.base_url", &self.api.base_url),
            ("site.base_url", &self.site.base_url),
        ] {
            reqwest::Url::parse(url).map_err(|e| {
                AppError::configuration(format!("Invalid URL for {name} '{url}': {e}"))
            })?;
        }

        Ok(())
    }
}
