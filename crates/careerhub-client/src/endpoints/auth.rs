use async_trait::async_trait;
use reqwest::Method;
use tracing::info;

use careerhub_core::AppResult;
use careerhub_core::types::id::UserId;
use careerhub_entity::user::{AuthResponse, Credentials, Registration, User};

use crate::api::AuthApi;
use crate::client::ApiClient;

#[async_trait]
impl AuthApi for ApiClient {
    async fn register(&self, registration: &Registration) -> AppResult<AuthResponse> {
        let resp: AuthResponse = self
            .send_json(self.request(Method::POST, "/auth/register").json(registration))
            .await?;
        info!(user_id = %resp.user.user_id, "Registered account");
        Ok(resp)
    }

    async fn login(&self, credentials: &Credentials) -> AppResult<AuthResponse> {
        let resp: AuthResponse = self
            .send_json(self.request(Method::POST, "/auth/login").json(credentials))
            .await?;
        info!(user_id = %resp.user.user_id, "Logged in");
        Ok(resp)
    }

    async fn get_user(&self, user_id: &UserId) -> AppResult<User> {
        self.send_json(
            self.request(Method::GET, "/users")
                .query(&[("user_id", user_id.as_str())]),
        )
        .await
    }
}
