//! Error types for hadith-core.
//!
//! Every backend call funnels its failures into [`ApiError`]. Payloads are
//! plain strings so the error stays `Clone` and can live inside UI state.

use thiserror::Error;

/// Errors that can occur while talking to the Hadees Search API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Configured base URL could not be parsed or joined
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
    /// Transport failure (connection refused, DNS, aborted fetch, ...)
    #[error("Request failed: {0}")]
    RequestFailed(String),
    /// Backend answered with a non-success status
    #[error("Backend returned HTTP {status} for {url}")]
    Status { status: u16, url: String },
    /// Response body did not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether the failure happened before any response was received.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::RequestFailed(_))
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::InvalidUrl(err.to_string())
    }
}

impl From<ApiError> for String {
    fn from(err: ApiError) -> String {
        err.to_string()
    }
}
