use serde::Serialize;

use crate::errors::ApiError;
use crate::http::ApiClient;
use crate::models::dedup::{BatchDeduplicationResult, DeduplicationResult, JobForDeduplication};

#[derive(Serialize)]
struct BatchRequest<'a> {
    jobs: &'a [JobForDeduplication],
}

/// `/job-deduplication` endpoints: similarity checks the ingest views run
/// before saving scraped jobs.
#[derive(Clone)]
pub struct JobDeduplicationService {
    client: ApiClient,
}

impl JobDeduplicationService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn deduplicate_job(
        &self,
        job: &JobForDeduplication,
    ) -> Result<DeduplicationResult, ApiError> {
        self.client.post("/job-deduplication/deduplicate", job).await
    }

    pub async fn deduplicate_batch(
        &self,
        jobs: &[JobForDeduplication],
    ) -> Result<BatchDeduplicationResult, ApiError> {
        self.client
            .post(
                "/job-deduplication/deduplicate-batch",
                &BatchRequest { jobs },
            )
            .await
    }
}
