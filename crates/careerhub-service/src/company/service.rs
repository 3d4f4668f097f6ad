//! Company service: creation, public pages and saving builder edits.

use std::sync::Arc;

use tracing::{info, warn};
use validator::Validate;

use careerhub_client::CompanyApi;
use careerhub_core::AppError;
use careerhub_core::types::id::{CompanyId, UserId};
use careerhub_entity::company::{Company, CreateCompany, UpdateCompany};

/// Result of resolving a public careers page.
#[derive(Debug, Clone, PartialEq)]
pub enum PublicPage {
    /// A published company.
    Visible(Company),
    /// Unknown slug or a company that is still a draft.
    NotFound,
}

impl PublicPage {
    pub fn company(&self) -> Option<&Company> {
        match self {
            Self::Visible(company) => Some(company),
            Self::NotFound => None,
        }
    }
}

/// Company operations for recruiters and the public page.
#[derive(Debug)]
pub struct CompanyService<A: CompanyApi> {
    /// Company endpoints.
    api: Arc<A>,
}

impl<A: CompanyApi> Clone for CompanyService<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
        }
    }
}

impl<A: CompanyApi> CompanyService<A> {
    /// Creates a new company service.
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Create a company after validating the form. An invalid form sends
    /// nothing.
    pub async fn create(&self, mut form: CreateCompany) -> Result<Company, AppError> {
        form.validate()?;
        form.name = form.name.trim().to_string();
        form.website = form.website.trim().to_string();

        let company = self.api.create(&form).await?;
        info!(company_id = %company.id, slug = %company.slug, "Company created");
        Ok(company)
    }

    /// Resolve the public careers page for `slug`.
    pub async fn public_page(&self, slug: &str) -> Result<PublicPage, AppError> {
        let slug = slug.trim();
        if slug.is_empty() {
            return Ok(PublicPage::NotFound);
        }
        match self.api.get_by_slug(slug).await? {
            Some(company) if company.published.is_public() => Ok(PublicPage::Visible(company)),
            Some(_) => {
                info!(slug = %slug, "Careers page is not published");
                Ok(PublicPage::NotFound)
            }
            None => Ok(PublicPage::NotFound),
        }
    }

    /// Load a company for editing. Companies owned by someone else are
    /// reported as not found.
    pub async fn owned_by_slug(&self, slug: &str, user: &UserId) -> Result<Company, AppError> {
        match self.api.get_by_slug(slug.trim()).await? {
            Some(company) if company.is_owned_by(user) => Ok(company),
            Some(_) => {
                warn!(slug = %slug, user_id = %user, "Company belongs to another user");
                Err(AppError::not_found(format!("Company '{slug}' not found")))
            }
            None => Err(AppError::not_found(format!("Company '{slug}' not found"))),
        }
    }

    /// Full company details by id.
    pub async fn details(&self, company_id: &CompanyId) -> Result<Company, AppError> {
        self.api.get_details(company_id).await
    }

    /// Send a partial update. On success `company` becomes the server's copy;
    /// on failure it is left untouched.
    pub async fn save(&self, company: &mut Company, update: UpdateCompany) -> Result<(), AppError> {
        match self.api.update(&company.id, update).await {
            Ok(saved) => {
                info!(company_id = %saved.id, sections = saved.sections.len(), "Company saved");
                *company = saved;
                Ok(())
            }
            Err(e) => {
                warn!(company_id = %company.id, error = %e, "Company save failed, keeping previous state");
                Err(e)
            }
        }
    }

    /// Every published company.
    pub async fn list_published(&self) -> Result<Vec<Company>, AppError> {
        self.api.list_published().await
    }
}
