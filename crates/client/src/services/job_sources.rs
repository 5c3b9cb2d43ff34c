use crate::errors::ApiError;
use crate::http::ApiClient;
use crate::models::job_source::{
    JobSource, JobSourceCreate, JobSourceListResponse, JobSourceUpdate,
};
use crate::models::MessageResponse;

/// `/job-sources` resource family (scraper source registry).
#[derive(Clone)]
pub struct JobSourceService {
    client: ApiClient,
}

impl JobSourceService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list_job_sources(&self) -> Result<JobSourceListResponse, ApiError> {
        self.client.get("/job-sources").await
    }

    pub async fn get_job_source(&self, source_id: &str) -> Result<JobSource, ApiError> {
        self.client.get(&format!("/job-sources/{source_id}")).await
    }

    pub async fn create_job_source(&self, source: &JobSourceCreate) -> Result<JobSource, ApiError> {
        self.client.post("/job-sources", source).await
    }

    pub async fn update_job_source(
        &self,
        source_id: &str,
        update: &JobSourceUpdate,
    ) -> Result<JobSource, ApiError> {
        self.client
            .put(&format!("/job-sources/{source_id}"), update)
            .await
    }

    pub async fn delete_job_source(&self, source_id: &str) -> Result<MessageResponse, ApiError> {
        self.client
            .delete(&format!("/job-sources/{source_id}"))
            .await
    }
}
