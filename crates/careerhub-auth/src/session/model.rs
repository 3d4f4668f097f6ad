//! The client-side session value.

use std::fmt;

use serde::{Deserialize, Serialize};

use careerhub_core::AppError;
use careerhub_core::types::id::{CompanyId, UserId};
use careerhub_entity::user::{AuthResponse, CompanySummary, User};

/// Token, user and company of the signed-in recruiter.
///
/// The three parts are set and cleared together.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token.
    #[serde(default)]
    pub token: Option<String>,
    /// Signed-in user.
    #[serde(default)]
    pub user: Option<User>,
    /// The user's company, once created.
    #[serde(default)]
    pub company: Option<CompanySummary>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("user", &self.user.as_ref().map(|u| &u.user_id))
            .field("company", &self.company.as_ref().map(|c| &c.company_id))
            .finish()
    }
}

impl Session {
    /// Build a session from a login or registration response.
    ///
    /// The company comes from the response, or from the user record when the
    /// response omits it.
    pub fn from_auth(resp: AuthResponse) -> Self {
        let company = resp.company.or_else(|| resp.user.company.clone());
        Self {
            token: Some(resp.token),
            user: Some(resp.user),
            company,
        }
    }

    /// Whether both a token and a user are present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    /// The bearer token.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// The signed-in user's id.
    pub fn user_id(&self) -> Option<&UserId> {
        self.user.as_ref().map(|u| &u.user_id)
    }

    /// The signed-in user's company id.
    pub fn company_id(&self) -> Option<&CompanyId> {
        self.company.as_ref().map(|c| &c.company_id)
    }

    /// The signed-in user, or a session error.
    pub fn require_user(&self) -> Result<&User, AppError> {
        match (&self.token, &self.user) {
            (Some(_), Some(user)) => Ok(user),
            _ => Err(AppError::session("Not signed in. Run `auth login` first")),
        }
    }

    /// The signed-in user's company, or a session error.
    pub fn require_company(&self) -> Result<&CompanySummary, AppError> {
        self.require_user()?;
        self.company
            .as_ref()
            .ok_or_else(|| AppError::session("No company yet. Run `company create` first"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth_response(with_company: bool) -> AuthResponse {
        let company = CompanySummary {
            company_id: CompanyId::new("c1"),
            name: "Acme".into(),
            slug: "acme".into(),
        };
        AuthResponse {
            token: "tok".into(),
            user: User {
                user_id: UserId::new("u1"),
                name: "Asha".into(),
                email: "asha@example.com".into(),
                company: Some(company.clone()),
            },
            company: with_company.then_some(company),
        }
    }

    #[test]
    fn test_company_falls_back_to_user_record() {
        let session = Session::from_auth(auth_response(false));
        assert_eq!(session.company_id().map(|c| c.as_str()), Some("c1"));
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_signed_out_requirements() {
        let session = Session::default();
        assert!(session.require_user().is_err());
        assert!(session.require_company().is_err());
    }

    #[test]
    fn test_debug_hides_token() {
        let session = Session::from_auth(auth_response(true));
        assert!(!format!("{session:?}").contains("tok\""));
    }
}
