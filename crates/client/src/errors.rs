use thiserror::Error;

/// Error type shared by the HTTP client and every service wrapper.
///
/// Services never catch: a failed request propagates to the caller, which
/// decides what to render. Nothing here is fatal and nothing is retried.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Status { status: u16, message: String },

    #[error("expected JSON response (got {content_type}): {snippet}")]
    UnexpectedContentType { content_type: String, snippet: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status code, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
