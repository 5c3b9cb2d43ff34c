use crate::errors::ApiError;
use crate::http::ApiClient;
use crate::models::auth::{
    LoginRequest, LoginResponse, RefreshTokenResponse, RegisterRequest, RegisterResponse,
};
use crate::models::MessageResponse;

/// Authentication endpoints.
///
/// `login` and `refresh_token` cache the returned bearer token on the shared
/// client, so every service built from the same session is authenticated
/// afterwards; `logout` clears it. There is no refresh scheduling; a refresh
/// happens only when the caller asks for one.
#[derive(Clone)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response: LoginResponse = self.client.post("/auth/login", credentials).await?;
        self.client
            .set_auth_token(Some(response.access_token.clone()));
        Ok(response)
    }

    pub async fn register(&self, data: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        self.client.post("/auth/register", data).await
    }

    pub async fn logout(&self) -> Result<MessageResponse, ApiError> {
        let response = self
            .client
            .post("/auth/logout", &serde_json::json!({}))
            .await?;
        self.client.set_auth_token(None);
        Ok(response)
    }

    pub async fn refresh_token(&self) -> Result<RefreshTokenResponse, ApiError> {
        let response: RefreshTokenResponse = self
            .client
            .post("/auth/refresh", &serde_json::json!({}))
            .await?;
        self.client
            .set_auth_token(Some(response.access_token.clone()));
        Ok(response)
    }
}
