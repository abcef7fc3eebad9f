//! Client configuration and presentation constants.
//!
//! The only runtime setting is the API base URL. Everything else here is
//! display policy shared by the app crate and the tests.
//!
//! # Usage
//!
//! ```
//! use hadith_core::config::{ApiConfig, DEFAULT_RESULT_LIMIT};
//!
//! let config = ApiConfig::new("http://localhost:8000/");
//! assert_eq!(config.base_url(), "http://localhost:8000");
//! assert_eq!(DEFAULT_RESULT_LIMIT, 100);
//! ```

// =============================================================================
// Backend
// =============================================================================

/// Environment variable holding the API base URL.
pub const API_URL_ENV: &str = "HADITH_API_URL";

/// Base URL used when nothing is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

// =============================================================================
// Result limits
// =============================================================================

/// Result-count limit of a fresh (or cleared) filter set.
pub const DEFAULT_RESULT_LIMIT: u32 = 100;

/// Supporting hadiths requested in question mode, whatever the filter panel says.
pub const QUESTION_RESULT_LIMIT: u32 = 5;

/// Results fetched when the detail view has to look a hadith up by id.
pub const DETAIL_LOOKUP_LIMIT: u32 = 10;

/// Limit used when the filter panel hands over a value that is not a number.
pub const FALLBACK_RESULT_LIMIT: u32 = 10;

// =============================================================================
// Presentation policy
// =============================================================================

/// Characters shown by a collapsed hadith card before the ellipsis.
pub const PREVIEW_CHAR_LIMIT: usize = 300;

/// Percentage at or above which the detail view shows "High Relevance".
pub const HIGH_RELEVANCE_PERCENT: i64 = 70;

/// Source collections offered by the filter panel.
pub const SOURCE_OPTIONS: &[&str] = &["Bukhari", "Muslim"];

/// Limit options offered by the filter panel, with their labels.
pub const LIMIT_OPTIONS: &[(u32, &str)] = &[
    (10, "10 results"),
    (20, "20 results"),
    (50, "50 results"),
    (100, "100 results"),
    (1000, "Max results"),
];

/// Connection settings for the Hadees Search API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a config for the given base URL, dropping trailing slashes.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Resolves the base URL from the environment.
    ///
    /// Search order:
    /// 1. `$HADITH_API_URL` at runtime (native targets only)
    /// 2. `$HADITH_API_URL` captured at compile time (the only option on web)
    /// 3. [`DEFAULT_API_URL`]
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Ok(url) = std::env::var(API_URL_ENV) {
                if !url.trim().is_empty() {
                    return Self::new(url);
                }
            }
        }

        Self::resolve(option_env!("HADITH_API_URL"))
    }

    fn resolve(candidate: Option<&str>) -> Self {
        match candidate {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_API_URL),
        }
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
