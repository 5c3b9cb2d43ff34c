//! Typed HTTP client, the single point of entry for all backend calls.
//!
//! Every service wrapper goes through [`ApiClient`]; no module issues raw
//! requests on its own. The client is cheap to clone (the inner
//! `reqwest::Client` is pooled, the token cell is shared), so each service
//! holds its own handle to the same underlying session.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::errors::ApiError;

/// Maximum number of raw body characters carried in a content-type error.
const SNIPPET_LEN: usize = 200;

/// FastAPI-style error envelope; `detail` is preferred over the bare
/// status text when the backend sends it.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Async client for the Jobdeck REST backend.
///
/// Behavior contract:
/// - every request carries `Content-Type: application/json`;
/// - `Authorization: Bearer <token>` is attached iff a token is set;
/// - bodies are serde-JSON; responses are decoded as JSON or the call fails;
/// - non-2xx responses fail with the status code and message, never retried.
///
/// The bearer token lives on the client instance, not in a global. Whoever
/// constructs the services decides which session they share; concurrent
/// writes to the token are last-write-wins.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Arc<Mutex<Option<String>>>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::from_config(&ClientConfig {
            base_url: base_url.into(),
            ..ClientConfig::default()
        })
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            http: Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: Arc::new(Mutex::new(None)),
        }
    }

    /// Sets (or clears, with `None`) the bearer token used by subsequent
    /// requests from this client and every clone sharing its session.
    pub fn set_auth_token(&self, token: Option<String>) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = token;
    }

    pub fn auth_token(&self) -> Option<String> {
        self.token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.request(Method::GET, path)).await
    }

    /// GET with a query string. Callers pass only the pairs they want on the
    /// wire; unset options are simply not in the slice.
    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        self.execute(self.request(Method::GET, path).query(query))
            .await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(self.request(Method::POST, path).json(body))
            .await
    }

    /// POST with no body (several endpoints take everything in the path).
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.request(Method::POST, path)).await
    }

    /// POST carrying structured metadata in the query string and no body,
    /// the shape of the timeline "log X" convenience endpoints.
    pub async fn post_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        self.execute(self.request(Method::POST, path).query(query))
            .await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(self.request(Method::PUT, path).json(body))
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.request(Method::DELETE, path)).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        debug!("{method} {url}");
        self.http.request(method, url)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn execute<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ApiError> {
        let mut req = req.header(CONTENT_TYPE, "application/json");
        if let Some(token) = self.auth_token() {
            req = req.bearer_auth(token);
        }

        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let reason = status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_string();
            let body = response.text().await.unwrap_or_default();
            warn!("API returned {status}: {body}");
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.detail)
                .unwrap_or(reason);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        if !content_type.starts_with("application/json") {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::UnexpectedContentType {
                content_type,
                snippet: snippet(&body),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(ApiError::Parse)
    }
}

fn snippet(body: &str) -> String {
    let mut s: String = body.chars().take(SNIPPET_LEN).collect();
    if body.chars().count() > SNIPPET_LEN {
        s.push('…');
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_normalizes_leading_slash() {
        let client = ApiClient::new("http://localhost:8000");
        assert_eq!(client.url("/jobs"), "http://localhost:8000/jobs");
        assert_eq!(client.url("jobs"), "http://localhost:8000/jobs");
    }

    #[test]
    fn test_url_normalizes_trailing_slash_on_base() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.url("/auth/login"), "http://localhost:8000/auth/login");
    }

    #[test]
    fn test_token_shared_across_clones() {
        let client = ApiClient::new("http://localhost:8000");
        let clone = client.clone();
        client.set_auth_token(Some("tok".to_string()));
        assert_eq!(clone.auth_token().as_deref(), Some("tok"));
        clone.set_auth_token(None);
        assert_eq!(client.auth_token(), None);
    }

    #[test]
    fn test_snippet_truncates_long_bodies() {
        let long = "x".repeat(500);
        let s = snippet(&long);
        assert!(s.chars().count() <= SNIPPET_LEN + 1);
        assert!(s.ends_with('…'));
        assert_eq!(snippet("short"), "short");
    }
}
