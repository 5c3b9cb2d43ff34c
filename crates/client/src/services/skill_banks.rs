use crate::errors::ApiError;
use crate::http::ApiClient;
use crate::models::skill_bank::{
    CertificationCreate, CertificationUpdate, EducationCreate, EducationUpdate, ExperienceCreate,
    ExperienceUpdate, ProjectCreate, ProjectUpdate, SkillBank, SkillBankCreate, SkillBankUpdate,
    SkillCreate, SkillUpdate, SummaryVariationCreate, SummaryVariationUpdate,
};
use crate::models::MessageResponse;

/// `/skill-banks` resource family.
///
/// The bank itself is keyed by the owning user id; every sub-collection
/// operation returns the full updated bank, which is how the views refresh
/// after an edit.
#[derive(Clone)]
pub struct SkillBankService {
    client: ApiClient,
}

impl SkillBankService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn create_skill_bank(&self, bank: &SkillBankCreate) -> Result<SkillBank, ApiError> {
        self.client.post("/skill-banks", bank).await
    }

    pub async fn get_skill_bank(&self, user_id: &str) -> Result<SkillBank, ApiError> {
        self.client.get(&format!("/skill-banks/{user_id}")).await
    }

    pub async fn update_skill_bank(
        &self,
        user_id: &str,
        update: &SkillBankUpdate,
    ) -> Result<SkillBank, ApiError> {
        self.client
            .put(&format!("/skill-banks/{user_id}"), update)
            .await
    }

    pub async fn delete_skill_bank(&self, user_id: &str) -> Result<MessageResponse, ApiError> {
        self.client.delete(&format!("/skill-banks/{user_id}")).await
    }

    // Skills

    pub async fn add_skill(&self, user_id: &str, skill: &SkillCreate) -> Result<SkillBank, ApiError> {
        self.client
            .post(&format!("/skill-banks/{user_id}/skills"), skill)
            .await
    }

    pub async fn update_skill(
        &self,
        user_id: &str,
        skill_id: &str,
        update: &SkillUpdate,
    ) -> Result<SkillBank, ApiError> {
        self.client
            .put(&format!("/skill-banks/{user_id}/skills/{skill_id}"), update)
            .await
    }

    pub async fn delete_skill(&self, user_id: &str, skill_id: &str) -> Result<SkillBank, ApiError> {
        self.client
            .delete(&format!("/skill-banks/{user_id}/skills/{skill_id}"))
            .await
    }

    // Work experiences

    pub async fn add_experience(
        &self,
        user_id: &str,
        experience: &ExperienceCreate,
    ) -> Result<SkillBank, ApiError> {
        self.client
            .post(&format!("/skill-banks/{user_id}/experiences"), experience)
            .await
    }

    pub async fn update_experience(
        &self,
        user_id: &str,
        experience_id: &str,
        update: &ExperienceUpdate,
    ) -> Result<SkillBank, ApiError> {
        self.client
            .put(
                &format!("/skill-banks/{user_id}/experiences/{experience_id}"),
                update,
            )
            .await
    }

    pub async fn delete_experience(
        &self,
        user_id: &str,
        experience_id: &str,
    ) -> Result<SkillBank, ApiError> {
        self.client
            .delete(&format!(
                "/skill-banks/{user_id}/experiences/{experience_id}"
            ))
            .await
    }

    // Education entries

    pub async fn add_education(
        &self,
        user_id: &str,
        education: &EducationCreate,
    ) -> Result<SkillBank, ApiError> {
        self.client
            .post(&format!("/skill-banks/{user_id}/education"), education)
            .await
    }

    pub async fn update_education(
        &self,
        user_id: &str,
        education_id: &str,
        update: &EducationUpdate,
    ) -> Result<SkillBank, ApiError> {
        self.client
            .put(
                &format!("/skill-banks/{user_id}/education/{education_id}"),
                update,
            )
            .await
    }

    pub async fn delete_education(
        &self,
        user_id: &str,
        education_id: &str,
    ) -> Result<SkillBank, ApiError> {
        self.client
            .delete(&format!("/skill-banks/{user_id}/education/{education_id}"))
            .await
    }

    // Projects

    pub async fn add_project(
        &self,
        user_id: &str,
        project: &ProjectCreate,
    ) -> Result<SkillBank, ApiError> {
        self.client
            .post(&format!("/skill-banks/{user_id}/projects"), project)
            .await
    }

    pub async fn update_project(
        &self,
        user_id: &str,
        project_id: &str,
        update: &ProjectUpdate,
    ) -> Result<SkillBank, ApiError> {
        self.client
            .put(
                &format!("/skill-banks/{user_id}/projects/{project_id}"),
                update,
            )
            .await
    }

    pub async fn delete_project(
        &self,
        user_id: &str,
        project_id: &str,
    ) -> Result<SkillBank, ApiError> {
        self.client
            .delete(&format!("/skill-banks/{user_id}/projects/{project_id}"))
            .await
    }

    // Certifications

    pub async fn add_certification(
        &self,
        user_id: &str,
        certification: &CertificationCreate,
    ) -> Result<SkillBank, ApiError> {
        self.client
            .post(
                &format!("/skill-banks/{user_id}/certifications"),
                certification,
            )
            .await
    }

    pub async fn update_certification(
        &self,
        user_id: &str,
        certification_id: &str,
        update: &CertificationUpdate,
    ) -> Result<SkillBank, ApiError> {
        self.client
            .put(
                &format!("/skill-banks/{user_id}/certifications/{certification_id}"),
                update,
            )
            .await
    }

    pub async fn delete_certification(
        &self,
        user_id: &str,
        certification_id: &str,
    ) -> Result<SkillBank, ApiError> {
        self.client
            .delete(&format!(
                "/skill-banks/{user_id}/certifications/{certification_id}"
            ))
            .await
    }

    // Summary variations

    pub async fn add_summary_variation(
        &self,
        user_id: &str,
        variation: &SummaryVariationCreate,
    ) -> Result<SkillBank, ApiError> {
        self.client
            .post(
                &format!("/skill-banks/{user_id}/summary-variations"),
                variation,
            )
            .await
    }

    pub async fn update_summary_variation(
        &self,
        user_id: &str,
        variation_id: &str,
        update: &SummaryVariationUpdate,
    ) -> Result<SkillBank, ApiError> {
        self.client
            .put(
                &format!("/skill-banks/{user_id}/summary-variations/{variation_id}"),
                update,
            )
            .await
    }

    pub async fn delete_summary_variation(
        &self,
        user_id: &str,
        variation_id: &str,
    ) -> Result<SkillBank, ApiError> {
        self.client
            .delete(&format!(
                "/skill-banks/{user_id}/summary-variations/{variation_id}"
            ))
            .await
    }
}
