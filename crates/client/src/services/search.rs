use crate::errors::ApiError;
use crate::http::ApiClient;
use crate::models::search::{HybridSearchResponse, SemanticSearchResponse};

/// Default result cap for both search modes, matching the backend's.
const DEFAULT_SEARCH_LIMIT: u32 = 20;

/// `/search` endpoints: embedding-based and keyword+embedding job search.
#[derive(Clone)]
pub struct SearchService {
    client: ApiClient,
}

impl SearchService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn semantic_search(
        &self,
        query: &str,
        limit: Option<u32>,
    ) -> Result<SemanticSearchResponse, ApiError> {
        self.client
            .get_query(
                "/search/semantic",
                &[
                    ("query", query.to_string()),
                    ("limit", limit.unwrap_or(DEFAULT_SEARCH_LIMIT).to_string()),
                ],
            )
            .await
    }

    pub async fn hybrid_search(
        &self,
        query: &str,
        limit: Option<u32>,
    ) -> Result<HybridSearchResponse, ApiError> {
        self.client
            .get_query(
                "/search/hybrid",
                &[
                    ("query", query.to_string()),
                    ("limit", limit.unwrap_or(DEFAULT_SEARCH_LIMIT).to_string()),
                ],
            )
            .await
    }
}
