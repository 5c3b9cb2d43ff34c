use crate::errors::ApiError;
use crate::http::ApiClient;
use crate::models::user::{UserProfile, UserProfileCreate, UserProfileUpdate};
use crate::models::MessageResponse;

/// `/users` resource family (user profiles).
#[derive(Clone)]
pub struct UserProfileService {
    client: ApiClient,
}

impl UserProfileService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn create_profile(
        &self,
        profile: &UserProfileCreate,
    ) -> Result<UserProfile, ApiError> {
        self.client.post("/users", profile).await
    }

    pub async fn get_profile(&self, user_id: &str) -> Result<UserProfile, ApiError> {
        self.client.get(&format!("/users/{user_id}")).await
    }

    /// The single-user deployments keep a default profile; this fetches it
    /// without knowing its id.
    pub async fn get_default_profile(&self) -> Result<UserProfile, ApiError> {
        self.client.get("/users/default").await
    }

    pub async fn update_profile(
        &self,
        user_id: &str,
        updates: &UserProfileUpdate,
    ) -> Result<UserProfile, ApiError> {
        self.client.put(&format!("/users/{user_id}"), updates).await
    }

    pub async fn delete_profile(&self, user_id: &str) -> Result<MessageResponse, ApiError> {
        self.client.delete(&format!("/users/{user_id}")).await
    }

    pub async fn list_profiles(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<UserProfile>, ApiError> {
        self.client
            .get_query(
                "/users",
                &[("limit", limit.to_string()), ("offset", offset.to_string())],
            )
            .await
    }

    pub async fn search_profile_by_email(&self, email: &str) -> Result<UserProfile, ApiError> {
        self.client
            .get_query("/users/search/by-email", &[("email", email.to_string())])
            .await
    }
}
