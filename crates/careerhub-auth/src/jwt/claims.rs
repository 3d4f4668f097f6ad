//! JWT payload decoding.

use chrono::{DateTime, Utc};
use jsonwebtoken::dangerous::insecure_decode;
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use serde::Deserialize;

use careerhub_core::AppError;

/// The subset of JWT claims the client cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TokenClaims {
    /// Subject, usually the user id.
    #[serde(default)]
    pub sub: Option<String>,
    /// Issued-at (seconds since epoch).
    #[serde(default)]
    pub iat: Option<i64>,
    /// Expiration (seconds since epoch).
    #[serde(default)]
    pub exp: Option<i64>,
}

impl TokenClaims {
    /// Read the claims of a `header.payload.signature` token.
    ///
    /// The signature is not checked and `exp` is not enforced here; callers
    /// compare it against their own clock with [`TokenClaims::is_expired_at`].
    pub fn decode(token: &str) -> Result<Self, AppError> {
        let data = insecure_decode::<Self>(token).map_err(|e| match e.kind() {
            JwtErrorKind::InvalidToken => AppError::session("Invalid JWT format"),
            JwtErrorKind::Base64(_) => AppError::session(format!("Failed to decode JWT: {e}")),
            _ => AppError::session(format!("Failed to parse JWT claims: {e}")),
        })?;
        Ok(data.claims)
    }

    /// Expiration as a timestamp, when the token carries one.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| DateTime::from_timestamp(exp, 0))
    }

    /// Whether the token has expired at `now`. Tokens without `exp` never expire.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.exp.is_some_and(|exp| now.timestamp() >= exp)
    }
}

#[cfg(test)]
pub(crate) fn encode_for_test(payload: &serde_json::Value) -> String {
    use base64::Engine;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.signature")
}
