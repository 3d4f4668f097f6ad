//! The one error type every CareerHub crate returns.
//!
//! Lower-level failures (HTTP, JSON, file I/O, config, form validation) are
//! folded into [`AppError`] by the `From` impls at the bottom of this file.

use std::fmt;
use thiserror::Error;

/// What went wrong, independent of where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// No such company, job or section.
    NotFound,
    /// Not signed in, bad credentials or an expired token.
    Authentication,
    /// The caller does not own the resource it tried to act on.
    Authorization,
    /// A form or filter value was rejected.
    Validation,
    /// The request clashes with existing state (duplicate section, slug taken).
    Conflict,
    Internal,
    Configuration,
    /// A payload could not be encoded or decoded.
    Serialization,
    /// Local file I/O.
    Storage,
    /// The persisted client session is missing or unusable.
    Session,
    /// The remote API answered with a server-side failure.
    ExternalService,
    /// The remote API could not be reached.
    Network,
}

impl ErrorKind {
    /// Short label used when printing an error.
    pub fn label(self) -> &'static str {
        match self {
            Self::NotFound => "not found",
            Self::Authentication => "not signed in",
            Self::Authorization => "forbidden",
            Self::Validation => "invalid input",
            Self::Conflict => "conflict",
            Self::Internal => "internal error",
            Self::Configuration => "configuration",
            Self::Serialization => "bad payload",
            Self::Storage => "file error",
            Self::Session => "session",
            Self::ExternalService => "server error",
            Self::Network => "network",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An error with a category, a message fit for the user, and the cause.
#[derive(Debug, Error)]
#[error("{message} ({kind})")]
pub struct AppError {
    pub kind: ErrorKind,
    /// Shown to the user as-is. For API failures this is the response body.
    pub message: String,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

macro_rules! kind_constructors {
    ($($name:ident => $kind:ident),* $(,)?) => {
        $(
            #[doc = concat!("An error of kind [`ErrorKind::", stringify!($kind), "`].")]
            pub fn $name(message: impl Into<String>) -> Self {
                Self::new(ErrorKind::$kind, message)
            }
        )*
    };
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Like [`AppError::new`], keeping `source` as the cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            source: Some(Box::new(source)),
            ..Self::new(kind, message)
        }
    }

    kind_constructors! {
        not_found => NotFound,
        authentication => Authentication,
        authorization => Authorization,
        validation => Validation,
        conflict => Conflict,
        internal => Internal,
        configuration => Configuration,
        session => Session,
        external_service => ExternalService,
    }

    /// Map a non-success HTTP status and its body text into an error.
    ///
    /// An empty body falls back to the generic `"API Error"` message.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = if body.trim().is_empty() {
            "API Error".to_string()
        } else {
            body.trim().to_string()
        };

        let kind = match status {
            400 | 422 => ErrorKind::Validation,
            401 => ErrorKind::Authentication,
            403 => ErrorKind::Authorization,
            404 => ErrorKind::NotFound,
            409 => ErrorKind::Conflict,
            _ => ErrorKind::ExternalService,
        };

        Self::new(kind, message)
    }

    /// Whether this error means the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }
}

// The cause is not `Clone`; listings keep a copy of their last error.
impl Clone for AppError {
    fn clone(&self) -> Self {
        Self::new(self.kind, self.message.clone())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(ErrorKind::Serialization, format!("Invalid JSON: {err}"), err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Storage, format!("File error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(ErrorKind::Configuration, format!("Bad configuration: {err}"), err)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return Self::with_source(
                ErrorKind::Serialization,
                format!("Malformed API response: {err}"),
                err,
            );
        }
        if let Some(status) = err.status() {
            return Self::with_source(
                AppError::from_status(status.as_u16(), "").kind,
                format!("API request failed: {err}"),
                err,
            );
        }
        Self::with_source(ErrorKind::Network, format!("API unreachable: {err}"), err)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errs: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errs
            .field_errors()
            .iter()
            .map(|(field, errors)| {
                let detail = errors
                    .iter()
                    .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                    .unwrap_or_else(|| "is invalid".to_string());
                if *field == "__all__" {
                    detail
                } else {
                    format!("{field} {detail}")
                }
            })
            .collect();
        fields.sort();

        Self::new(ErrorKind::Validation, fields.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_maps_kinds() {
        assert_eq!(AppError::from_status(404, "gone").kind, ErrorKind::NotFound);
        assert_eq!(
            AppError::from_status(401, "").kind,
            ErrorKind::Authentication
        );
        assert_eq!(AppError::from_status(422, "bad").kind, ErrorKind::Validation);
        assert_eq!(
            AppError::from_status(502, "").kind,
            ErrorKind::ExternalService
        );
    }

    #[test]
    fn test_from_status_empty_body_uses_generic_message() {
        let err = AppError::from_status(500, "   ");
        assert_eq!(err.message, "API Error");
    }

    #[test]
    fn test_display_leads_with_message() {
        let err = AppError::validation("name is required");
        assert_eq!(err.to_string(), "name is required (invalid input)");
    }

    #[test]
    fn test_clone_drops_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = AppError::from(io);
        let cloned = err.clone();
        assert_eq!(cloned.kind, ErrorKind::Storage);
        assert!(cloned.source.is_none());
    }
}
