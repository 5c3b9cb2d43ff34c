use crate::errors::ApiError;
use crate::http::ApiClient;
use crate::models::company::{
    Company, CompanyCreate, CompanyJobsResponse, CompanyListResponse, CompanySearchResponse,
    CompanyUpdate,
};
use crate::models::MessageResponse;

/// `/companies` resource family.
#[derive(Clone)]
pub struct CompanyService {
    client: ApiClient,
}

impl CompanyService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list_companies(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<CompanyListResponse, ApiError> {
        self.client
            .get_query(
                "/companies",
                &[("limit", limit.to_string()), ("offset", offset.to_string())],
            )
            .await
    }

    pub async fn search_companies(&self, query: &str) -> Result<CompanySearchResponse, ApiError> {
        self.client
            .get_query("/companies/search", &[("query", query.to_string())])
            .await
    }

    pub async fn get_company(&self, company_id: &str) -> Result<Company, ApiError> {
        self.client.get(&format!("/companies/{company_id}")).await
    }

    pub async fn create_company(&self, company: &CompanyCreate) -> Result<Company, ApiError> {
        self.client.post("/companies", company).await
    }

    pub async fn update_company(
        &self,
        company_id: &str,
        update: &CompanyUpdate,
    ) -> Result<Company, ApiError> {
        self.client
            .put(&format!("/companies/{company_id}"), update)
            .await
    }

    pub async fn delete_company(&self, company_id: &str) -> Result<MessageResponse, ApiError> {
        self.client
            .delete(&format!("/companies/{company_id}"))
            .await
    }

    pub async fn get_company_jobs(
        &self,
        company_id: &str,
        limit: u32,
        offset: u32,
    ) -> Result<CompanyJobsResponse, ApiError> {
        self.client
            .get_query(
                &format!("/companies/{company_id}/jobs"),
                &[("limit", limit.to_string()), ("offset", offset.to_string())],
            )
            .await
    }
}
