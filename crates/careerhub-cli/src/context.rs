//! Per-invocation state: configuration, session and API handles.

use std::sync::Arc;

use tracing::debug;

use careerhub_auth::{RouteDecision, RouteGate, SessionManager, SessionStore};
use careerhub_client::ApiClient;
use careerhub_core::AppError;
use careerhub_core::config::AppConfig;
use careerhub_core::types::id::UserId;
use careerhub_entity::company::Company;
use careerhub_service::CompanyService;

/// Everything a command needs.
pub struct CliContext {
    pub config: AppConfig,
    pub sessions: SessionManager<ApiClient>,
}

impl CliContext {
    /// Load configuration and the persisted session.
    pub async fn open(config_path: &str) -> Result<Self, AppError> {
        let config = crate::commands::load_config(config_path)?;
        let anonymous = ApiClient::new(&config.api, None)?;
        let store = SessionStore::from_config(&config.session);
        let sessions = SessionManager::start(anonymous, store, &config.session).await?;
        Ok(Self { config, sessions })
    }

    /// An API client carrying the current session token.
    pub fn client(&self) -> Result<Arc<ApiClient>, AppError> {
        let token = self.sessions.current().token().map(String::from);
        Ok(Arc::new(ApiClient::new(&self.config.api, token)?))
    }

    /// Apply the route gate to the page a command stands in for.
    pub fn require_route(&self, path: &str) -> Result<(), AppError> {
        let authenticated = self.sessions.current().is_authenticated();
        match RouteGate::check(path, authenticated) {
            RouteDecision::Allow => Ok(()),
            RouteDecision::RedirectToLogin => {
                debug!(path = %path, "Route requires a session");
                Err(AppError::authentication(
                    "Not signed in. Run `careerhub-cli auth login` first",
                ))
            }
        }
    }

    pub fn user_id(&self) -> Result<UserId, AppError> {
        Ok(self.sessions.current().require_user()?.user_id.clone())
    }

    /// The signed-in recruiter's company, loaded fresh and ownership-checked.
    pub async fn own_company(&self) -> Result<Company, AppError> {
        self.require_route("/dashboard")?;
        let slug = self.sessions.current().require_company()?.slug.clone();
        let service = CompanyService::new(self.client()?);
        service.owned_by_slug(&slug, &self.user_id()?).await
    }
}
