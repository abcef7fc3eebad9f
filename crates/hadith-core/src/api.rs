//! HTTP client wrapper for the Hadees Search API.
//!
//! Two endpoints are consumed, both plain `GET` requests with query
//! parameters:
//!
//! - `/search?query=..&filter_source=..&limit=..` → `[Hadith]`
//! - `/answer?question=..&limit=..` → `{ answer, hadiths }`
//!
//! reqwest runs on both targets: hyper on native, the browser `fetch()` API on
//! WASM. Calls are single best-effort requests with no retry, timeout or
//! cache; callers decide what the user sees when one fails.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, error};
use url::Url;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::types::{AnswerResponse, Hadith, SearchFilters};

/// Backend operations the views depend on.
///
/// The views only ever talk to the network through this trait, which keeps
/// the state machines testable against an in-memory fake.
#[async_trait(?Send)]
pub trait HadithApi {
    /// Keyword search, constrained by the filter set.
    #[must_use = "Search failures should be presented to the user"]
    async fn search(&self, query: &str, filters: &SearchFilters)
        -> Result<Vec<Hadith>, ApiError>;

    /// Question answering backed by `limit` supporting hadiths.
    #[must_use = "Answer failures should be presented to the user"]
    async fn ask(&self, question: &str, limit: u32) -> Result<AnswerResponse, ApiError>;
}

/// [`HadithApi`] over HTTP.
///
/// Cloning is cheap: `reqwest::Client` keeps its connection pool behind an
/// `Arc`, so every view can hold its own copy.
#[derive(Debug, Clone)]
pub struct HttpHadithApi {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpHadithApi {
    /// Builds a client for the configured base URL.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(config.base_url())
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", config.base_url(), e)))?;

        if base_url.scheme() != "http" && base_url.scheme() != "https" {
            return Err(ApiError::InvalidUrl(format!(
                "Unsupported scheme: {} (only http/https allowed)",
                base_url.scheme()
            )));
        }

        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
        })
    }

    /// Base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        // Join against "base/" so a base URL with a path prefix keeps it.
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let prefixed = format!("{}/", base.path());
            base.set_path(&prefixed);
        }
        Ok(base.join(path)?)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        debug!("GET {} {:?}", url, params);

        let response = self
            .client
            .get(url.clone())
            .query(params)
            .send()
            .await
            .map_err(|e| {
                error!("Request to {} failed: {}", url, e);
                ApiError::RequestFailed(format!("Failed to fetch {}: {}", url, e))
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("{} returned HTTP {}", url, status.as_u16());
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.json::<T>().await.map_err(|e| {
            error!("Unexpected response body from {}: {}", url, e);
            ApiError::Decode(format!("{}: {}", url, e))
        })
    }
}

// Clients are interchangeable when they target the same backend.
impl PartialEq for HttpHadithApi {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

#[async_trait(?Send)]
impl HadithApi for HttpHadithApi {
    async fn search(
        &self,
        query: &str,
        filters: &SearchFilters,
    ) -> Result<Vec<Hadith>, ApiError> {
        let mut params = vec![("query", query.to_string())];
        params.extend(filters.query_params());
        self.get_json("search", &params).await
    }

    async fn ask(&self, question: &str, limit: u32) -> Result<AnswerResponse, ApiError> {
        let params = [("question", question.to_string()), ("limit", limit.to_string())];
        self.get_json("answer", &params).await
    }
}
