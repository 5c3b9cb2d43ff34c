use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::push_opt;

/// A job posting as the backend returns it. Scraped data is uneven, so the
/// descriptive fields are optional and either salary bound may be absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub job_id: String,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub remote_type: Option<String>,
    #[serde(default)]
    pub experience_level: Option<String>,
    #[serde(default)]
    pub salary_min: Option<u32>,
    #[serde(default)]
    pub salary_max: Option<u32>,
    #[serde(default)]
    pub posted_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// Fields the backend sends that this client does not model, passed
    /// through untouched.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobSearchFilters {
    pub query: Option<String>,
    pub job_type: Option<String>,
    pub remote_type: Option<String>,
    pub experience_level: Option<String>,
    pub salary_min: Option<u32>,
    pub salary_max: Option<u32>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub posted_after: Option<String>,
    pub posted_before: Option<String>,
}

impl JobSearchFilters {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut q = Vec::new();
        push_opt(&mut q, "query", self.query.as_ref());
        push_opt(&mut q, "job_type", self.job_type.as_ref());
        push_opt(&mut q, "remote_type", self.remote_type.as_ref());
        push_opt(&mut q, "experience_level", self.experience_level.as_ref());
        push_opt(&mut q, "salary_min", self.salary_min.as_ref());
        push_opt(&mut q, "salary_max", self.salary_max.as_ref());
        push_opt(&mut q, "location", self.location.as_ref());
        push_opt(&mut q, "company", self.company.as_ref());
        push_opt(&mut q, "posted_after", self.posted_after.as_ref());
        push_opt(&mut q, "posted_before", self.posted_before.as_ref());
        q
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSearchResponse {
    pub message: String,
    pub user_id: String,
    #[serde(default)]
    pub filters_applied: HashMap<String, Value>,
    pub results: Vec<Job>,
    pub total_results: u64,
    pub page: u32,
    pub page_size: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationCount {
    pub location: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyCount {
    pub company: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentTrend {
    pub last_7_days: u64,
    pub last_30_days: u64,
    pub last_90_days: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobStatisticsResponse {
    pub message: String,
    pub user_id: String,
    pub total_jobs: u64,
    pub jobs_by_type: HashMap<String, u64>,
    pub jobs_by_remote_type: HashMap<String, u64>,
    pub jobs_by_experience_level: HashMap<String, u64>,
    pub average_salary_by_type: HashMap<String, SalaryRange>,
    pub top_locations: Vec<LocationCount>,
    pub top_companies: Vec<CompanyCount>,
    pub recent_trend: RecentTrend,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListResponse {
    pub jobs: Vec<Job>,
    pub total: u64,
}

/// Payload for `POST /jobs`. Title and company are the only required fields;
/// scraped imports rarely have more.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobCreate {
    pub title: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_query_omits_unset_keys() {
        let filters = JobSearchFilters {
            query: Some("rust engineer".to_string()),
            salary_min: Some(100_000),
            ..Default::default()
        };
        let q = filters.to_query();
        assert_eq!(
            q,
            vec![
                ("query", "rust engineer".to_string()),
                ("salary_min", "100000".to_string()),
            ]
        );
    }

    #[test]
    fn test_to_query_empty_filters() {
        assert!(JobSearchFilters::default().to_query().is_empty());
    }

    #[test]
    fn test_job_update_serializes_only_set_fields() {
        let update = JobUpdate {
            title: Some("Staff Engineer".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({ "title": "Staff Engineer" }));
    }

    #[test]
    fn test_job_tolerates_extra_fields() {
        let job: Job = serde_json::from_value(serde_json::json!({
            "job_id": "j1",
            "title": "Backend Engineer",
            "company": "Acme",
            "source_site": "indeed"
        }))
        .unwrap();
        assert_eq!(job.extra["source_site"], "indeed");
        assert!(job.salary_min.is_none());
    }
}
