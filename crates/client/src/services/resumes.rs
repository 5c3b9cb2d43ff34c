use crate::errors::ApiError;
use crate::http::ApiClient;
use crate::models::resume::{Resume, ResumeCreate, ResumeListResponse, ResumeUpdate};
use crate::models::MessageResponse;

/// Default page size for `list_resumes`, matching the backend's.
const DEFAULT_LIST_LIMIT: u32 = 50;

/// `/resumes` resource family.
#[derive(Clone)]
pub struct ResumeService {
    client: ApiClient,
}

impl ResumeService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Lists resumes, optionally filtered by status. `limit` defaults to 50
    /// when `None`; `offset` defaults to 0.
    pub async fn list_resumes(
        &self,
        status: Option<&str>,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<ResumeListResponse, ApiError> {
        let mut query = Vec::new();
        if let Some(status) = status {
            query.push(("status", status.to_string()));
        }
        query.push(("limit", limit.unwrap_or(DEFAULT_LIST_LIMIT).to_string()));
        query.push(("offset", offset.unwrap_or(0).to_string()));
        self.client.get_query("/resumes", &query).await
    }

    pub async fn get_resume(&self, resume_id: &str) -> Result<Resume, ApiError> {
        self.client.get(&format!("/resumes/{resume_id}")).await
    }

    pub async fn create_resume(&self, resume: &ResumeCreate) -> Result<Resume, ApiError> {
        self.client.post("/resumes", resume).await
    }

    pub async fn update_resume(
        &self,
        resume_id: &str,
        update: &ResumeUpdate,
    ) -> Result<Resume, ApiError> {
        self.client
            .put(&format!("/resumes/{resume_id}"), update)
            .await
    }

    pub async fn delete_resume(&self, resume_id: &str) -> Result<MessageResponse, ApiError> {
        self.client.delete(&format!("/resumes/{resume_id}")).await
    }
}
