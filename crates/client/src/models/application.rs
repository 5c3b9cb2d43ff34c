use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::push_opt;

/// A tracked job application. `status` is an open string domain
/// (`"applied"`, `"interview_scheduled"`, ...); the backend owns the set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobApplication {
    pub id: String,
    pub job_id: String,
    pub user_profile_id: String,
    pub status: String,
    #[serde(default)]
    pub applied_date: Option<String>,
    #[serde(default)]
    pub response_date: Option<String>,
    #[serde(default)]
    pub resume_version: Option<String>,
    #[serde(default)]
    pub cover_letter: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub follow_up_date: Option<String>,
    #[serde(default)]
    pub interview_scheduled: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobApplicationCreate {
    pub user_profile_id: String,
    pub job_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobApplicationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interview_scheduled: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobApplicationListResponse {
    pub applications: Vec<JobApplication>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobApplicationFilters {
    pub status: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl JobApplicationFilters {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut q = Vec::new();
        push_opt(&mut q, "status", self.status.as_ref());
        push_opt(&mut q, "limit", self.limit.as_ref());
        push_opt(&mut q, "offset", self.offset.as_ref());
        q
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_include_zero_offset_when_set() {
        let filters = JobApplicationFilters {
            offset: Some(0),
            ..Default::default()
        };
        assert_eq!(filters.to_query(), vec![("offset", "0".to_string())]);
    }
}
