use crate::errors::ApiError;
use crate::http::ApiClient;
use crate::models::stats::{
    ApplicationStatsResponse, GeneralStatsResponse, JobSourceStatsResponse, JobStatsResponse,
    ResumeStatsResponse, SkillBankStatsResponse, UserStatsResponse,
};

/// `/stats/*` endpoints.
#[derive(Clone)]
pub struct AnalyticsService {
    client: ApiClient,
}

impl AnalyticsService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn general_stats(&self) -> Result<GeneralStatsResponse, ApiError> {
        self.client.get("/stats/general").await
    }

    pub async fn job_stats(&self) -> Result<JobStatsResponse, ApiError> {
        self.client.get("/stats/jobs").await
    }

    pub async fn user_stats(&self) -> Result<UserStatsResponse, ApiError> {
        self.client.get("/stats/users").await
    }

    pub async fn application_stats(&self) -> Result<ApplicationStatsResponse, ApiError> {
        self.client.get("/stats/applications").await
    }

    pub async fn resume_stats(&self) -> Result<ResumeStatsResponse, ApiError> {
        self.client.get("/stats/resumes").await
    }

    pub async fn skill_bank_stats(&self) -> Result<SkillBankStatsResponse, ApiError> {
        self.client.get("/stats/skill-banks").await
    }

    pub async fn job_source_stats(&self) -> Result<JobSourceStatsResponse, ApiError> {
        self.client.get("/stats/job-sources").await
    }
}
