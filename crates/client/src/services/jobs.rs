use crate::errors::ApiError;
use crate::http::ApiClient;
use crate::models::job::{
    Job, JobCreate, JobListResponse, JobSearchFilters, JobSearchResponse, JobStatisticsResponse,
    JobUpdate,
};
use crate::models::MessageResponse;

/// `/jobs` resource family.
#[derive(Clone)]
pub struct JobService {
    client: ApiClient,
}

impl JobService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn search_jobs(
        &self,
        filters: &JobSearchFilters,
    ) -> Result<JobSearchResponse, ApiError> {
        self.client
            .get_query("/jobs/search", &filters.to_query())
            .await
    }

    pub async fn get_job_statistics(&self) -> Result<JobStatisticsResponse, ApiError> {
        self.client.get("/jobs/statistics").await
    }

    pub async fn list_jobs(&self) -> Result<JobListResponse, ApiError> {
        self.client.get("/jobs").await
    }

    pub async fn get_job(&self, job_id: &str) -> Result<Job, ApiError> {
        self.client.get(&format!("/jobs/{job_id}")).await
    }

    pub async fn create_job(&self, job: &JobCreate) -> Result<Job, ApiError> {
        self.client.post("/jobs", job).await
    }

    pub async fn update_job(&self, job_id: &str, update: &JobUpdate) -> Result<Job, ApiError> {
        self.client.put(&format!("/jobs/{job_id}"), update).await
    }

    pub async fn delete_job(&self, job_id: &str) -> Result<MessageResponse, ApiError> {
        self.client.delete(&format!("/jobs/{job_id}")).await
    }
}
