//! Responses for the `/stats/*` analytics endpoints.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralStatsResponse {
    pub total_users: u64,
    pub total_jobs: u64,
    pub total_applications: u64,
    pub total_companies: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobStatsResponse {
    pub total_jobs: u64,
    pub jobs_by_type: HashMap<String, u64>,
    pub jobs_by_remote_type: HashMap<String, u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStatsResponse {
    pub total_users: u64,
    pub users_by_role: HashMap<String, u64>,
    pub users_by_status: HashMap<String, u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationStatsResponse {
    pub total_applications: u64,
    pub applications_by_status: HashMap<String, u64>,
    pub applications_by_type: HashMap<String, u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeStatsResponse {
    pub total_resumes: u64,
    pub resumes_by_type: HashMap<String, u64>,
    pub resumes_by_status: HashMap<String, u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCount {
    pub skill: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillBankStatsResponse {
    pub total_skill_banks: u64,
    pub avg_skills_per_bank: f64,
    pub most_common_skills: Vec<SkillCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceJobCount {
    pub source: String,
    pub job_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSourceStatsResponse {
    pub total_job_sources: u64,
    pub active_sources: u64,
    pub jobs_by_source: Vec<SourceJobCount>,
}
