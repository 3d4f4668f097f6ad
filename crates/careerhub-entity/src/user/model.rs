//! Recruiter account models and auth payloads.

use serde::{Deserialize, Serialize};

use careerhub_core::types::id::{CompanyId, UserId};

use crate::company::Company;

/// The company a user owns, as embedded in auth and user responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanySummary {
    /// Company identifier.
    pub company_id: CompanyId,
    /// Display name.
    pub name: String,
    /// Public slug.
    pub slug: String,
}

impl From<&Company> for CompanySummary {
    fn from(company: &Company) -> Self {
        Self {
            company_id: company.id.clone(),
            name: company.name.clone(),
            slug: company.slug.clone(),
        }
    }
}

/// A recruiter account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User identifier.
    #[serde(alias = "_id")]
    pub user_id: UserId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Login email.
    pub email: String,
    /// Owned company, once created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<CompanySummary>,
}

/// Response of `POST /auth/register` and `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Bearer token.
    pub token: String,
    /// The signed-in user.
    pub user: User,
    /// The user's company, if one exists.
    #[serde(default)]
    pub company: Option<CompanySummary>,
}

/// Login request body.
#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Registration request body.
///
/// `confirm_password` is only checked locally and never sent.
#[derive(Clone, Serialize, Deserialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing, default)]
    pub confirm_password: String,
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_response_without_company() {
        let resp: AuthResponse = serde_json::from_value(serde_json::json!({
            "token": "t",
            "user": { "user_id": "u1", "name": "Asha", "email": "asha@example.com" },
            "company": null
        }))
        .unwrap();
        assert!(resp.company.is_none());
        assert_eq!(resp.user.user_id.as_str(), "u1");
    }

    #[test]
    fn test_registration_omits_confirmation() {
        let reg = Registration {
            name: "Asha".into(),
            email: "asha@example.com".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
        };
        let json = serde_json::to_value(&reg).unwrap();
        assert!(json.get("confirm_password").is_none());
        assert!(!format!("{reg:?}").contains("secret1"));
    }
}
