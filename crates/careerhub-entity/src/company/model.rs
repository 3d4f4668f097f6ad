//! Company entity and its request payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use careerhub_core::types::id::{CompanyId, UserId};

use super::asset::Asset;
use super::publication::PublicationState;
use super::section::Section;
use super::theme::Theme;

/// A company profile and its careers page configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Company identifier.
    #[serde(rename = "company_id", alias = "_id")]
    pub id: CompanyId,
    /// Owning recruiter.
    #[serde(default)]
    pub user_id: Option<UserId>,
    /// Display name.
    pub name: String,
    /// URL-safe identifier used in public routes.
    pub slug: String,
    /// Rich-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Company website.
    #[serde(default)]
    pub website: Option<String>,
    /// Logo asset.
    #[serde(default)]
    pub logo_url: Option<Asset>,
    /// Banner asset.
    #[serde(default)]
    pub banner_url: Option<Asset>,
    /// Page colors.
    #[serde(default)]
    pub theme: Theme,
    /// Page body sections.
    #[serde(default)]
    pub sections: Vec<Section>,
    /// Whether the careers page is public.
    #[serde(default)]
    pub published: PublicationState,
    /// Last modification time.
    #[serde(default, alias = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Company {
    /// Whether `user` owns this company.
    pub fn is_owned_by(&self, user: &UserId) -> bool {
        self.user_id.as_ref() == Some(user)
    }
}

/// Payload for `POST /company/create`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateCompany {
    /// Company name.
    #[validate(custom(function = "not_blank", message = "is required"))]
    pub name: String,
    /// Company website, `http://` or `https://`.
    #[validate(custom(function = "http_url", message = "must be a valid http(s) URL"))]
    pub website: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

// scheme, then a dotted host without whitespace, then anything
fn http_url(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"))
        .ok_or_else(|| ValidationError::new("url"))?;

    let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let valid_host = host.contains('.')
        && !host.starts_with('.')
        && !host.ends_with('.')
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | ':'));

    if !valid_host || rest.chars().any(char::is_whitespace) {
        return Err(ValidationError::new("url"));
    }
    Ok(())
}

/// Partial update payload for `PATCH /company/update`.
///
/// Only `Some` fields are sent. The client injects `company_id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateCompany {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<CompanyId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<Asset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_url: Option<Asset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<Section>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<PublicationState>,
}

impl UpdateCompany {
    /// An update that only changes the publication state.
    pub fn publication(state: PublicationState) -> Self {
        Self {
            published: Some(state),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use careerhub_core::AppError;

    #[test]
    fn test_deserialize_minimal_company() {
        let company: Company = serde_json::from_value(serde_json::json!({
            "company_id": "c1",
            "user_id": "u1",
            "name": "Acme",
            "slug": "acme",
            "published": "PUBLISHED"
        }))
        .unwrap();
        assert!(company.published.is_public());
        assert!(company.sections.is_empty());
        assert_eq!(company.theme, Theme::default());
        assert!(company.is_owned_by(&UserId::new("u1")));
        assert!(!company.is_owned_by(&UserId::new("u2")));
    }

    #[test]
    fn test_create_company_requires_name_and_website() {
        let form = CreateCompany::default();
        let err = AppError::from(form.validate().unwrap_err());
        assert_eq!(err.message, "name is required; website must be a valid http(s) URL");
    }

    #[test]
    fn test_website_pattern() {
        for ok in ["https://acme.com", "http://jobs.acme.co.in/careers?x=1"] {
            assert!(http_url(ok).is_ok(), "{ok}");
        }
        for bad in ["acme.com", "ftp://acme.com", "https://acme", "https://ac me.com"] {
            assert!(http_url(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn test_publication_update_payload() {
        let json = serde_json::to_value(UpdateCompany::publication(PublicationState::Published))
            .unwrap();
        assert_eq!(json, serde_json::json!({ "published": "PUBLISHED" }));
    }
}
