use crate::errors::ApiError;
use crate::http::ApiClient;
use crate::models::application::{
    JobApplication, JobApplicationCreate, JobApplicationFilters, JobApplicationListResponse,
    JobApplicationUpdate,
};
use crate::models::MessageResponse;

/// `/applications` resource family.
#[derive(Clone)]
pub struct JobApplicationService {
    client: ApiClient,
}

impl JobApplicationService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list_applications(
        &self,
        filters: &JobApplicationFilters,
    ) -> Result<JobApplicationListResponse, ApiError> {
        self.client
            .get_query("/applications", &filters.to_query())
            .await
    }

    pub async fn get_application(&self, application_id: &str) -> Result<JobApplication, ApiError> {
        self.client
            .get(&format!("/applications/{application_id}"))
            .await
    }

    pub async fn create_application(
        &self,
        application: &JobApplicationCreate,
    ) -> Result<JobApplication, ApiError> {
        self.client.post("/applications", application).await
    }

    pub async fn update_application(
        &self,
        application_id: &str,
        update: &JobApplicationUpdate,
    ) -> Result<JobApplication, ApiError> {
        self.client
            .put(&format!("/applications/{application_id}"), update)
            .await
    }

    pub async fn delete_application(
        &self,
        application_id: &str,
    ) -> Result<MessageResponse, ApiError> {
        self.client
            .delete(&format!("/applications/{application_id}"))
            .await
    }
}
