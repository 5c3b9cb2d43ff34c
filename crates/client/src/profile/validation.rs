use crate::models::user::UserProfileCreate;

/// Checks a create payload against the server's required fields before it is
/// sent. Returns one message per problem; empty means the payload will pass
/// the server-side checks for these fields.
pub fn validate_profile(profile: &UserProfileCreate) -> Vec<String> {
    let mut errors = Vec::new();

    if profile.last_name.trim().is_empty() {
        errors.push("Last name is required".to_string());
    }
    if profile.email.trim().is_empty() {
        errors.push("Email is required".to_string());
    }
    if profile.skills.is_empty() {
        errors.push("At least one skill is required".to_string());
    }
    if profile.preferred_job_types.is_empty() {
        errors.push("At least one preferred job type is required".to_string());
    }
    if profile.preferred_remote_types.is_empty() {
        errors.push("At least one preferred remote type is required".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::{JobType, RemoteType};

    fn valid_payload() -> UserProfileCreate {
        UserProfileCreate {
            first_name: Some("Ada".to_string()),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: None,
            city: None,
            state: None,
            linkedin_url: None,
            portfolio_url: None,
            current_title: None,
            experience_years: None,
            skills: vec!["Rust".to_string()],
            education: None,
            bio: None,
            preferred_locations: vec![],
            preferred_job_types: vec![JobType::FullTime],
            preferred_remote_types: vec![RemoteType::Remote],
            desired_salary_min: None,
            desired_salary_max: None,
        }
    }

    #[test]
    fn test_valid_payload_has_no_errors() {
        assert!(validate_profile(&valid_payload()).is_empty());
    }

    #[test]
    fn test_blank_last_name_rejected() {
        let mut payload = valid_payload();
        payload.last_name = "   ".to_string();
        let errors = validate_profile(&payload);
        assert_eq!(errors, vec!["Last name is required".to_string()]);
    }

    #[test]
    fn test_empty_email_rejected() {
        let mut payload = valid_payload();
        payload.email = String::new();
        assert!(validate_profile(&payload).contains(&"Email is required".to_string()));
    }

    #[test]
    fn test_all_problems_reported_together() {
        let mut payload = valid_payload();
        payload.last_name = String::new();
        payload.email = String::new();
        payload.skills.clear();
        payload.preferred_job_types.clear();
        payload.preferred_remote_types.clear();
        assert_eq!(validate_profile(&payload).len(), 5);
    }
}
