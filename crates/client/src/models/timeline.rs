//! Timeline events: a per-user activity log the views render as a feed.
//! `event_type` is an open string domain (`"job_saved"`,
//! `"application_submitted"`, `"interview_scheduled"`, `"status_changed"`,
//! `"custom_event"`, ...); `metadata` is a free-form bag.
//!
//! The "log X" convenience endpoints POST their structured metadata in the
//! query string with an empty body; that wire shape is preserved here via
//! the `to_query()` builders.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::push_opt;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub id: String,
    pub user_profile_id: String,
    pub event_type: String,
    pub title: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub related_job_id: Option<String>,
    #[serde(default)]
    pub related_application_id: Option<String>,
    #[serde(default)]
    pub metadata: HashMap<String, Value>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTimelineEventRequest {
    pub event_type: String,
    pub title: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_application_id: Option<String>,
    #[serde(skip_serializing_if = "HashMap::is_empty", default)]
    pub metadata: HashMap<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCustomEventRequest {
    pub title: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "HashMap::is_empty", default)]
    pub metadata: HashMap<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTimelineEventRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, Value>>,
}

/// Options for `GET /timeline/user/{id}`. `event_types` is appended once per
/// value (repeated query key).
#[derive(Debug, Clone, Default)]
pub struct TimelineQuery {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub job_id: Option<String>,
    pub event_types: Vec<String>,
    pub days_back: Option<u32>,
}

impl TimelineQuery {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut q = Vec::new();
        push_opt(&mut q, "limit", self.limit.as_ref());
        push_opt(&mut q, "offset", self.offset.as_ref());
        push_opt(&mut q, "job_id", self.job_id.as_ref());
        push_opt(&mut q, "days_back", self.days_back.as_ref());
        for event_type in &self.event_types {
            q.push(("event_types", event_type.clone()));
        }
        q
    }
}

#[derive(Debug, Clone, Default)]
pub struct MilestonesQuery {
    pub limit: Option<u32>,
    pub days_back: Option<u32>,
}

impl MilestonesQuery {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut q = Vec::new();
        push_opt(&mut q, "limit", self.limit.as_ref());
        push_opt(&mut q, "days_back", self.days_back.as_ref());
        q
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpcomingQuery {
    pub days_ahead: Option<u32>,
    pub limit: Option<u32>,
}

impl UpcomingQuery {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut q = Vec::new();
        push_opt(&mut q, "days_ahead", self.days_ahead.as_ref());
        push_opt(&mut q, "limit", self.limit.as_ref());
        q
    }
}

#[derive(Debug, Clone, Default)]
pub struct JobTimelineQuery {
    pub user_profile_id: Option<String>,
    pub limit: Option<u32>,
}

impl JobTimelineQuery {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut q = Vec::new();
        push_opt(&mut q, "user_profile_id", self.user_profile_id.as_ref());
        push_opt(&mut q, "limit", self.limit.as_ref());
        q
    }
}

/// Metadata for `POST .../job/{jobId}/saved`.
#[derive(Debug, Clone)]
pub struct JobSavedLog {
    pub job_title: String,
    pub company_name: String,
    pub notes: Option<String>,
    pub tags: Vec<String>,
}

impl JobSavedLog {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut q = vec![
            ("job_title", self.job_title.clone()),
            ("company_name", self.company_name.clone()),
        ];
        push_opt(&mut q, "notes", self.notes.as_ref());
        for tag in &self.tags {
            q.push(("tags", tag.clone()));
        }
        q
    }
}

/// Metadata for `POST .../application/{id}/submitted`.
#[derive(Debug, Clone)]
pub struct ApplicationSubmittedLog {
    pub job_id: String,
    pub job_title: String,
    pub company_name: String,
    pub application_method: Option<String>,
}

impl ApplicationSubmittedLog {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut q = vec![
            ("job_id", self.job_id.clone()),
            ("job_title", self.job_title.clone()),
            ("company_name", self.company_name.clone()),
        ];
        push_opt(&mut q, "application_method", self.application_method.as_ref());
        q
    }
}

/// Metadata for `POST .../application/{id}/interview-scheduled`.
#[derive(Debug, Clone)]
pub struct InterviewScheduledLog {
    pub job_id: String,
    pub job_title: String,
    pub company_name: String,
    pub interview_date: String,
    pub interview_type: Option<String>,
    pub interviewer: Option<String>,
}

impl InterviewScheduledLog {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut q = vec![
            ("job_id", self.job_id.clone()),
            ("job_title", self.job_title.clone()),
            ("company_name", self.company_name.clone()),
            ("interview_date", self.interview_date.clone()),
        ];
        push_opt(&mut q, "interview_type", self.interview_type.as_ref());
        push_opt(&mut q, "interviewer", self.interviewer.as_ref());
        q
    }
}

/// Metadata for `POST .../application/{id}/status-changed`.
#[derive(Debug, Clone)]
pub struct StatusChangeLog {
    pub job_id: String,
    pub job_title: String,
    pub company_name: String,
    pub old_status: String,
    pub new_status: String,
    pub notes: Option<String>,
}

impl StatusChangeLog {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut q = vec![
            ("job_id", self.job_id.clone()),
            ("job_title", self.job_title.clone()),
            ("company_name", self.company_name.clone()),
            ("old_status", self.old_status.clone()),
            ("new_status", self.new_status.clone()),
        ];
        push_opt(&mut q, "notes", self.notes.as_ref());
        q
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_query_repeats_event_types() {
        let query = TimelineQuery {
            limit: Some(10),
            event_types: vec!["job_saved".to_string(), "custom_event".to_string()],
            ..Default::default()
        };
        let q = query.to_query();
        assert_eq!(
            q,
            vec![
                ("limit", "10".to_string()),
                ("event_types", "job_saved".to_string()),
                ("event_types", "custom_event".to_string()),
            ]
        );
    }

    #[test]
    fn test_job_saved_log_skips_missing_notes() {
        let log = JobSavedLog {
            job_title: "Backend Engineer".to_string(),
            company_name: "Acme".to_string(),
            notes: None,
            tags: vec!["remote".to_string()],
        };
        let q = log.to_query();
        assert!(!q.iter().any(|(k, _)| *k == "notes"));
        assert!(q.contains(&("tags", "remote".to_string())));
    }
}
