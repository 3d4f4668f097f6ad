//! Session lifecycle manager: register, login, logout and company binding.

use chrono::Utc;
use tracing::{info, warn};

use careerhub_client::AuthApi;
use careerhub_core::config::SessionConfig;
use careerhub_core::error::AppError;
use careerhub_entity::user::{CompanySummary, Credentials, Registration};

use crate::jwt::TokenClaims;
use crate::password::RegistrationValidator;

use super::model::Session;
use super::store::SessionStore;

/// Owns the authoritative session and keeps the store in sync with it.
pub struct SessionManager<A: AuthApi> {
    /// Account endpoints.
    api: A,
    /// Session persistence.
    store: SessionStore,
    /// Form checks run before any request.
    validator: RegistrationValidator,
    /// Current state.
    session: Session,
}

impl<A: AuthApi> std::fmt::Debug for SessionManager<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("store", &self.store)
            .field("session", &self.session)
            .finish()
    }
}

impl<A: AuthApi> SessionManager<A> {
    /// Loads the persisted session.
    ///
    /// An expired token signs the user out and removes the stored session.
    pub async fn start(api: A, store: SessionStore, config: &SessionConfig) -> Result<Self, AppError> {
        let mut session = store.load().await?;

        if session_expired(&session) {
            warn!("Stored session token has expired, signing out");
            store.clear().await?;
            session = Session::default();
        }

        Ok(Self {
            api,
            store,
            validator: RegistrationValidator::new(config),
            session,
        })
    }

    /// The current session.
    pub fn current(&self) -> &Session {
        &self.session
    }

    /// Registers a new account and signs it in.
    ///
    /// The form is validated locally first; an invalid form sends nothing.
    pub async fn register(&mut self, registration: Registration) -> Result<&Session, AppError> {
        self.validator.validate(&registration)?;

        let resp = self.api.register(&registration).await?;
        self.replace(Session::from_auth(resp)).await?;

        info!(email = %registration.email, "Registration successful");
        Ok(&self.session)
    }

    /// Signs in with email and password.
    pub async fn login(&mut self, credentials: Credentials) -> Result<&Session, AppError> {
        self.validator.validate_credentials(&credentials)?;

        let resp = self.api.login(&credentials).await?;
        self.replace(Session::from_auth(resp)).await?;

        info!(email = %credentials.email, "Login successful");
        Ok(&self.session)
    }

    /// Signs out, dropping token, user and company together.
    pub async fn logout(&mut self) -> Result<(), AppError> {
        let user_id = self.session.user_id().cloned();
        self.session = Session::default();
        self.store.clear().await?;

        if let Some(user_id) = user_id {
            info!(user_id = %user_id, "Logged out");
        }
        Ok(())
    }

    /// Binds a newly created company to the session.
    pub async fn set_company(&mut self, company: CompanySummary) -> Result<(), AppError> {
        self.session.require_user()?;

        if let Some(user) = self.session.user.as_mut() {
            user.company = Some(company.clone());
        }
        info!(company_id = %company.company_id, slug = %company.slug, "Company bound to session");
        self.session.company = Some(company);
        self.store.save(&self.session).await
    }

    /// Re-fetches the signed-in user (and its company) from the API.
    pub async fn refresh_user(&mut self) -> Result<&Session, AppError> {
        let user_id = self.session.require_user()?.user_id.clone();
        let user = self.api.get_user(&user_id).await?;

        if user.company.is_some() {
            self.session.company = user.company.clone();
        }
        self.session.user = Some(user);
        self.store.save(&self.session).await?;
        Ok(&self.session)
    }

    async fn replace(&mut self, session: Session) -> Result<(), AppError> {
        self.store.save(&session).await?;
        self.session = session;
        Ok(())
    }
}

// Opaque (non-JWT) tokens carry no expiry and are kept.
fn session_expired(session: &Session) -> bool {
    session
        .token()
        .and_then(|token| TokenClaims::decode(token).ok())
        .is_some_and(|claims| claims.is_expired_at(Utc::now()))
}
