//! Shared HTTP plumbing for all endpoint groups.

use std::fmt;
use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use careerhub_core::config::ApiConfig;
use careerhub_core::{AppError, AppResult};

/// Client for the careers-page REST API.
///
/// Holds an optional bearer token that is attached to every request.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.token.is_some())
            .finish()
    }
}

impl ApiClient {
    /// Build a client from configuration and an optional session token.
    pub fn new(config: &ApiConfig, token: Option<String>) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.trim().is_empty()),
        })
    }

    /// Replace the bearer token.
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token.filter(|t| !t.trim().is_empty());
    }

    /// Whether a bearer token is attached.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        debug!(method = %method, url = %url, "API request");

        let builder = self.http.request(method, &url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a request and decode its JSON body.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> AppResult<T> {
        let resp = Self::check(builder.send().await?).await?;
        Ok(resp.json().await?)
    }

    /// Send a request and discard its body.
    pub(crate) async fn send_empty(&self, builder: RequestBuilder) -> AppResult<()> {
        Self::check(builder.send().await?).await?;
        Ok(())
    }

    // Non-2xx responses become errors carrying the body text.
    async fn check(resp: Response) -> AppResult<Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        debug!(status = status.as_u16(), body = %body, "API error response");
        Err(AppError::from_status(status.as_u16(), &body))
    }
}
