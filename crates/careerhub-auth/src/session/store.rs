//! File persistence for the session.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use careerhub_core::config::SessionConfig;
use careerhub_core::error::AppError;

use super::model::Session;

/// Persists the session as a single JSON file.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Creates a store at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store from configuration.
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(&config.path)
    }

    /// Path of the session file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted session.
    ///
    /// A missing file means signed out. An unreadable file is discarded with
    /// a warning and also means signed out.
    pub async fn load(&self) -> Result<Session, AppError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No session file");
                return Ok(Session::default());
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice(&raw) {
            Ok(session) => Ok(session),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Discarding corrupt session file");
                self.clear().await?;
                Ok(Session::default())
            }
        }
    }

    /// Writes the session, creating parent directories as needed.
    pub async fn save(&self, session: &Session) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_vec_pretty(session)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        debug!(path = %self.path.display(), "Session saved");
        Ok(())
    }

    /// Removes the session file. Token, user and company go together.
    pub async fn clear(&self) -> Result<(), AppError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
