use serde::{Deserialize, Serialize};

use crate::models::user::UserProfile;

/// Per-bucket scores. A bucket is 100 when all of its defining fields are
/// present, 50 otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionScores {
    pub personal: u32,
    pub professional: u32,
    pub preferences: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletenessReport {
    /// Rounded mean of the three bucket scores.
    pub overall_score: u32,
    pub sections: SectionScores,
    pub missing_fields: Vec<String>,
    pub suggestions: Vec<String>,
}

const COMPLETE: u32 = 100;
const PARTIAL: u32 = 50;

/// Scores a profile across three buckets: personal (name + email),
/// professional (title + years of experience), and preferences (at least one
/// preferred job type).
pub fn completeness_report(profile: &UserProfile) -> CompletenessReport {
    let mut missing_fields = Vec::new();
    let mut suggestions = Vec::new();

    let personal_complete = has(&profile.first_name)
        && has(&profile.last_name)
        && has(&profile.email);
    if !has(&profile.first_name) {
        missing_fields.push("first_name".to_string());
    }
    if !has(&profile.last_name) {
        missing_fields.push("last_name".to_string());
    }
    if !has(&profile.email) {
        missing_fields.push("email".to_string());
    }
    if !personal_complete {
        suggestions.push("Fill in your name and email to complete the personal section".to_string());
    }

    let professional_complete = has(&profile.current_title) && profile.experience_years.is_some();
    if !has(&profile.current_title) {
        missing_fields.push("current_title".to_string());
    }
    if profile.experience_years.is_none() {
        missing_fields.push("experience_years".to_string());
    }
    if !professional_complete {
        suggestions
            .push("Add your current title and years of experience".to_string());
    }

    let preferences_complete = !profile.preferred_job_types.is_empty();
    if !preferences_complete {
        missing_fields.push("preferred_job_types".to_string());
        suggestions.push("Pick at least one preferred job type".to_string());
    }

    let sections = SectionScores {
        personal: if personal_complete { COMPLETE } else { PARTIAL },
        professional: if professional_complete { COMPLETE } else { PARTIAL },
        preferences: if preferences_complete { COMPLETE } else { PARTIAL },
    };

    let overall_score = ((sections.personal + sections.professional + sections.preferences) as f64
        / 3.0)
        .round() as u32;

    CompletenessReport {
        overall_score,
        sections,
        missing_fields,
        suggestions,
    }
}

fn has(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn base_profile() -> UserProfile {
        UserProfile {
            id: "u1".to_string(),
            first_name: None,
            last_name: None,
            email: None,
            phone: None,
            city: None,
            state: None,
            linkedin_url: None,
            portfolio_url: None,
            current_title: None,
            experience_years: None,
            skills: vec![],
            education: None,
            bio: None,
            preferred_locations: vec![],
            preferred_job_types: vec![],
            preferred_remote_types: vec![],
            desired_salary_min: None,
            desired_salary_max: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_profile_scores_fifty_everywhere() {
        let report = completeness_report(&base_profile());
        assert_eq!(report.sections.personal, 50);
        assert_eq!(report.sections.professional, 50);
        assert_eq!(report.sections.preferences, 50);
        assert_eq!(report.overall_score, 50);
        assert!(report.missing_fields.contains(&"email".to_string()));
        assert!(!report.suggestions.is_empty());
    }

    #[test]
    fn test_full_profile_scores_hundred() {
        let mut profile = base_profile();
        profile.first_name = Some("Ada".to_string());
        profile.last_name = Some("Lovelace".to_string());
        profile.email = Some("ada@example.com".to_string());
        profile.current_title = Some("Engineer".to_string());
        profile.experience_years = Some(7);
        profile.preferred_job_types = vec![crate::models::user::JobType::FullTime];

        let report = completeness_report(&profile);
        assert_eq!(report.overall_score, 100);
        assert!(report.missing_fields.is_empty());
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn test_partial_profile_rounds_mean() {
        let mut profile = base_profile();
        profile.first_name = Some("Ada".to_string());
        profile.last_name = Some("Lovelace".to_string());
        profile.email = Some("ada@example.com".to_string());
        // personal 100, professional 50, preferences 50 -> 200/3 = 66.67 -> 67
        let report = completeness_report(&profile);
        assert_eq!(report.overall_score, 67);
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        let mut profile = base_profile();
        profile.email = Some(String::new());
        let report = completeness_report(&profile);
        assert!(report.missing_fields.contains(&"email".to_string()));
    }
}
