//! Resolution of the hadith shown by the detail route.
//!
//! The card that links to `/hadith/:id` hands the full entity over as
//! navigation state. When that is missing (a reload, a shared link) the id is
//! looked up through the search endpoint instead.

use tracing::{error, info, warn};

use crate::api::HadithApi;
use crate::config::DETAIL_LOOKUP_LIMIT;
use crate::types::{Hadith, SearchFilters};

/// Message of the not-found state.
pub const NOT_FOUND_MESSAGE: &str = "Hadith not found";

/// Message of the failure state.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load hadith. Please try again later.";

/// How a displayed hadith was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailMatch {
    /// Handed over by the navigating view; no request made
    Carried,
    /// Lookup returned an entry with the requested id
    Exact,
    /// Lookup had no exact match; the top result is shown instead
    FirstResult,
}

/// What the detail view renders.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Loaded { hadith: Hadith, matched: DetailMatch },
    NotFound,
    Failed(String),
}

impl DetailState {
    /// Message for the not-found and failure states.
    pub fn message(&self) -> Option<&str> {
        match self {
            DetailState::NotFound => Some(NOT_FOUND_MESSAGE),
            DetailState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Returns the carried hadith if it is the one the route asks for.
pub fn carried_for(id: &str, carried: Option<&Hadith>) -> Option<Hadith> {
    carried.filter(|h| h.hadith_id == id).cloned()
}

/// Picks the entry to display from a lookup response.
///
/// An exact id match wins; otherwise the first entry is used. An empty
/// response yields `None`.
pub fn pick_match(id: &str, mut hadiths: Vec<Hadith>) -> Option<(Hadith, DetailMatch)> {
    if let Some(pos) = hadiths.iter().position(|h| h.hadith_id == id) {
        return Some((hadiths.swap_remove(pos), DetailMatch::Exact));
    }
    if hadiths.is_empty() {
        return None;
    }
    Some((hadiths.swap_remove(0), DetailMatch::FirstResult))
}

/// Resolves the detail view for `id`.
///
/// A matching carried hadith is used as-is without touching the network.
/// Otherwise the id is searched for (limit [`DETAIL_LOOKUP_LIMIT`], no source
/// filter). Transport failures become [`DetailState::Failed`].
pub async fn resolve<A>(api: &A, id: &str, carried: Option<&Hadith>) -> DetailState
where
    A: HadithApi + ?Sized,
{
    if let Some(hadith) = carried_for(id, carried) {
        return DetailState::Loaded {
            hadith,
            matched: DetailMatch::Carried,
        };
    }

    let filters = SearchFilters {
        source: None,
        limit: DETAIL_LOOKUP_LIMIT,
    };

    match api.search(id, &filters).await {
        Ok(hadiths) => match pick_match(id, hadiths) {
            Some((hadith, DetailMatch::FirstResult)) => {
                warn!(
                    "No exact match for hadith '{}', showing top result '{}'",
                    id, hadith.hadith_id
                );
                DetailState::Loaded {
                    hadith,
                    matched: DetailMatch::FirstResult,
                }
            }
            Some((hadith, matched)) => DetailState::Loaded { hadith, matched },
            None => {
                info!("Hadith '{}' not found", id);
                DetailState::NotFound
            }
        },
        Err(e) => {
            error!("Error fetching hadith '{}': {}", id, e);
            DetailState::Failed(LOAD_FAILED_MESSAGE.to_string())
        }
    }
}
