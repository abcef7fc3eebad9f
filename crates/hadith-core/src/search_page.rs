//! Search page state machine.
//!
//! The page moves between four phases:
//!
//! ```text
//!            submit / filter change
//!   Idle ─────────────────────────────▶ Loading ──ok──▶ ResultsShown
//!                                         │  ▲                │
//!                                         err└──── submit ────┘
//!                                         ▼
//!                                       Error
//! ```
//!
//! Every transition into `Loading` hands out a [`PageRequest`] carrying a
//! ticket. The caller performs the request (see [`run_request`]) and feeds the
//! outcome back through [`SearchPageState::apply`]. Only the most recent
//! ticket is accepted, so a slow response to an earlier query can never
//! overwrite the results of a later one.

use tracing::{debug, error, info};

use crate::api::HadithApi;
use crate::config::QUESTION_RESULT_LIMIT;
use crate::error::ApiError;
use crate::presentation::results_heading;
use crate::types::{sort_by_score, Hadith, SearchFilters, SearchMode};

/// Message shown in the error banner, whatever went wrong underneath.
pub const REQUEST_FAILED_MESSAGE: &str =
    "An error occurred while processing your request. Please try again.";

/// Where the page is in its request cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Nothing submitted yet
    Idle,
    /// A request is in flight
    Loading,
    /// The latest request succeeded
    ResultsShown,
    /// The latest request failed; holds the user-facing message
    Error(String),
}

/// Backend call the page wants performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestKind {
    Search {
        query: String,
        filters: SearchFilters,
    },
    Ask {
        question: String,
        limit: u32,
    },
}

/// A request tagged with the ticket its outcome must be applied under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub ticket: u64,
    pub kind: RequestKind,
}

/// Successful backend payload for a [`RequestKind`].
#[derive(Debug, Clone, PartialEq)]
pub enum PageResponse {
    Results(Vec<Hadith>),
    Answer { answer: String, hadiths: Vec<Hadith> },
}

/// Performs a page request against the backend.
pub async fn run_request<A>(api: &A, kind: &RequestKind) -> Result<PageResponse, ApiError>
where
    A: HadithApi + ?Sized,
{
    match kind {
        RequestKind::Search { query, filters } => {
            let hadiths = api.search(query, filters).await?;
            Ok(PageResponse::Results(hadiths))
        }
        RequestKind::Ask { question, limit } => {
            let response = api.ask(question, *limit).await?;
            Ok(PageResponse::Answer {
                answer: response.answer,
                hadiths: response.hadiths,
            })
        }
    }
}

/// Transient state owned by the search page.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPageState {
    query: String,
    mode: SearchMode,
    filters: SearchFilters,
    results: Vec<Hadith>,
    answer: Option<String>,
    // Query and mode that produced `results`; only move on success.
    shown_query: String,
    shown_mode: SearchMode,
    phase: Phase,
    latest_ticket: u64,
}

impl Default for SearchPageState {
    fn default() -> Self {
        Self {
            query: String::new(),
            mode: SearchMode::Search,
            filters: SearchFilters::default(),
            results: Vec::new(),
            answer: None,
            shown_query: String::new(),
            shown_mode: SearchMode::Search,
            phase: Phase::Idle,
            latest_ticket: 0,
        }
    }
}

impl SearchPageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Query of the latest submission.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Mode of the latest submission.
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Query whose outcome is on screen; lags [`query`](Self::query) while a
    /// request is pending or after it failed.
    pub fn shown_query(&self) -> &str {
        &self.shown_query
    }

    pub fn filters(&self) -> &SearchFilters {
        &self.filters
    }

    /// Results, always sorted by descending score.
    pub fn results(&self) -> &[Hadith] {
        &self.results
    }

    /// Synthesized answer (question mode only).
    pub fn answer(&self) -> Option<&str> {
        self.answer.as_deref()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Message for the error banner, if the latest request failed.
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Error(message) => Some(message),
            _ => None,
        }
    }

    /// The filter panel only makes sense for keyword results.
    pub fn show_filter_panel(&self) -> bool {
        self.shown_mode == SearchMode::Search && !self.results.is_empty()
    }

    /// A query ran to completion and found nothing.
    pub fn show_no_results(&self) -> bool {
        !self.query.is_empty() && self.phase == Phase::ResultsShown && self.results.is_empty()
    }

    pub fn results_heading(&self) -> String {
        results_heading(self.results.len(), self.shown_mode == SearchMode::Question)
    }

    /// Submits a query from the search box.
    ///
    /// Returns `None` (and leaves the state untouched) for a blank query.
    pub fn submit(&mut self, query: &str, mode: SearchMode) -> Option<PageRequest> {
        if query.trim().is_empty() {
            return None;
        }

        self.query = query.to_string();
        self.mode = mode;

        let kind = match mode {
            SearchMode::Search => {
                self.answer = None;
                RequestKind::Search {
                    query: self.query.clone(),
                    filters: self.filters.clone(),
                }
            }
            SearchMode::Question => RequestKind::Ask {
                question: self.query.clone(),
                limit: QUESTION_RESULT_LIMIT,
            },
        };

        Some(self.issue(kind))
    }

    /// Replaces the filter set.
    ///
    /// In search mode with a current query the search is re-issued; question
    /// answering never uses the filters, so nothing is requested there.
    pub fn change_filters(&mut self, filters: SearchFilters) -> Option<PageRequest> {
        self.filters = filters;

        if self.query.is_empty() || self.mode != SearchMode::Search {
            return None;
        }

        let query = self.query.clone();
        self.submit(&query, SearchMode::Search)
    }

    /// Resets to the default filters (limit 100, all sources).
    pub fn clear_filters(&mut self) -> Option<PageRequest> {
        self.change_filters(SearchFilters::default())
    }

    fn issue(&mut self, kind: RequestKind) -> PageRequest {
        self.latest_ticket += 1;
        self.phase = Phase::Loading;
        debug!("Issuing request #{}: {:?}", self.latest_ticket, kind);
        PageRequest {
            ticket: self.latest_ticket,
            kind,
        }
    }

    /// Applies the outcome of the request issued under `ticket`.
    ///
    /// Returns `false` when the ticket has been superseded and the outcome was
    /// discarded.
    pub fn apply(&mut self, ticket: u64, outcome: Result<PageResponse, ApiError>) -> bool {
        if ticket != self.latest_ticket {
            debug!(
                "Discarding stale response #{} (latest is #{})",
                ticket, self.latest_ticket
            );
            return false;
        }

        match outcome {
            Ok(PageResponse::Results(mut hadiths)) => {
                sort_by_score(&mut hadiths);
                info!("Search for '{}' returned {} hadiths", self.query, hadiths.len());
                self.results = hadiths;
                self.shown_query = self.query.clone();
                self.shown_mode = SearchMode::Search;
                self.phase = Phase::ResultsShown;
            }
            Ok(PageResponse::Answer {
                answer,
                mut hadiths,
            }) => {
                sort_by_score(&mut hadiths);
                info!(
                    "Answer for '{}' backed by {} hadiths",
                    self.query,
                    hadiths.len()
                );
                self.answer = Some(answer);
                self.results = hadiths;
                self.shown_query = self.query.clone();
                self.shown_mode = SearchMode::Question;
                self.phase = Phase::ResultsShown;
            }
            Err(e) => {
                error!("Search error: {}", e);
                self.phase = Phase::Error(REQUEST_FAILED_MESSAGE.to_string());
            }
        }
        true
    }
}


#[cfg(test)]
mod tests {
    use super::fake::{Call, FakeApi};
    use super::*;
    use crate::config::DEFAULT_RESULT_LIMIT;
    use crate::types::{hadith, AnswerResponse};

    async fn drive(state: &mut SearchPageState, api: &FakeApi, request: PageRequest) -> bool {
        let outcome = run_request(api, &request.kind).await;
        state.apply(request.ticket, outcome)
    }

    #[test]
    fn test_blank_query_is_ignored() {
        let mut state = SearchPageState::new();
        assert!(state.submit("   ", SearchMode::Search).is_none());
        assert_eq!(state.phase(), &Phase::Idle);
        assert_eq!(state.query(), "");
    }

    #[tokio::test]
    async fn test_search_results_sorted_descending() {
        let api = FakeApi {
            search_results: vec![hadith("a", 0.3), hadith("b", 0.8), hadith("c", 0.55)],
            ..FakeApi::default()
        };
        let mut state = SearchPageState::new();

        let request = state.submit("prayer", SearchMode::Search).unwrap();
        assert!(state.is_loading());
        assert!(drive(&mut state, &api, request).await);

        let scores: Vec<f64> = state.results().iter().map(|h| h.score).collect();
        assert_eq!(scores, vec![0.8, 0.55, 0.3]);
        assert_eq!(state.phase(), &Phase::ResultsShown);
        assert!(state.show_filter_panel());
        assert_eq!(state.results_heading(), "3 Search Results");
        assert_eq!(
            api.calls.borrow().as_slice(),
            &[Call::Search {
                query: "prayer".to_string(),
                filters: SearchFilters::default(),
            }]
        );
    }

    #[tokio::test]
    async fn test_question_mode_uses_fixed_limit_and_hides_filters() {
        let api = FakeApi {
            answer: Some(AnswerResponse {
                answer: "Be kind.".to_string(),
                hadiths: vec![hadith("x", 0.4), hadith("y", 0.9)],
            }),
            ..FakeApi::default()
        };
        let mut state = SearchPageState::new();
        let _ = state.change_filters(SearchFilters {
            source: Some("Muslim".to_string()),
            limit: 1000,
        });

        let request = state
            .submit("What does Islam say about kindness?", SearchMode::Question)
            .unwrap();
        assert_eq!(
            request.kind,
            RequestKind::Ask {
                question: "What does Islam say about kindness?".to_string(),
                limit: 5,
            }
        );
        drive(&mut state, &api, request).await;

        assert_eq!(state.answer(), Some("Be kind."));
        assert_eq!(state.results()[0].hadith_id, "y");
        assert!(!state.show_filter_panel());
        assert_eq!(state.results_heading(), "2 Related Hadiths");
    }

    #[tokio::test]
    async fn test_search_submit_clears_answer() {
        let api = FakeApi {
            search_results: vec![hadith("a", 0.5)],
            answer: Some(AnswerResponse {
                answer: "Answer".to_string(),
                hadiths: vec![],
            }),
            ..FakeApi::default()
        };
        let mut state = SearchPageState::new();

        let request = state.submit("question?", SearchMode::Question).unwrap();
        drive(&mut state, &api, request).await;
        assert!(state.answer().is_some());

        let request = state.submit("charity", SearchMode::Search).unwrap();
        assert!(state.answer().is_none());
        drive(&mut state, &api, request).await;
        assert!(state.answer().is_none());
    }

    #[test]
    fn test_filter_panel_needs_search_mode_and_results() {
        let mut state = SearchPageState::new();
        assert!(!state.show_filter_panel());

        let request = state.submit("fasting", SearchMode::Search).unwrap();
        state.apply(request.ticket, Ok(PageResponse::Results(vec![])));
        assert!(!state.show_filter_panel());
        assert!(state.show_no_results());

        let request = state.submit("fasting", SearchMode::Search).unwrap();
        state.apply(request.ticket, Ok(PageResponse::Results(vec![hadith("a", 0.1)])));
        assert!(state.show_filter_panel());
        assert!(!state.show_no_results());
    }

    #[test]
    fn test_filter_change_reissues_search() {
        let mut state = SearchPageState::new();
        assert!(state
            .change_filters(SearchFilters::default().with_limit_value("20"))
            .is_none());

        let first = state.submit("zakat", SearchMode::Search).unwrap();
        state.apply(first.ticket, Ok(PageResponse::Results(vec![hadith("a", 0.5)])));

        let filters = state.filters().with_source_value("Bukhari");
        let request = state.change_filters(filters.clone()).unwrap();
        assert!(request.ticket > first.ticket);
        assert_eq!(
            request.kind,
            RequestKind::Search {
                query: "zakat".to_string(),
                filters,
            }
        );
        assert!(state.is_loading());
    }

    #[test]
    fn test_filter_change_in_question_mode_is_noop() {
        let mut state = SearchPageState::new();
        let request = state.submit("why fast?", SearchMode::Question).unwrap();
        state.apply(
            request.ticket,
            Ok(PageResponse::Answer {
                answer: "Because.".to_string(),
                hadiths: vec![hadith("a", 0.7)],
            }),
        );

        let before = state.phase().clone();
        assert!(state
            .change_filters(SearchFilters::default().with_limit_value("10"))
            .is_none());
        assert_eq!(state.phase(), &before);
        assert_eq!(state.answer(), Some("Because."));
    }

    #[test]
    fn test_clear_filters_resets_and_reissues() {
        let mut state = SearchPageState::new();
        let _ = state.change_filters(SearchFilters {
            source: Some("Muslim".to_string()),
            limit: 20,
        });
        let request = state.submit("hajj", SearchMode::Search).unwrap();
        state.apply(request.ticket, Ok(PageResponse::Results(vec![hadith("a", 0.5)])));

        let request = state.clear_filters().unwrap();
        assert_eq!(state.filters().limit, DEFAULT_RESULT_LIMIT);
        assert!(state.filters().source.is_none());
        assert_eq!(
            request.kind,
            RequestKind::Search {
                query: "hajj".to_string(),
                filters: SearchFilters::default(),
            }
        );
    }

    #[tokio::test]
    async fn test_failure_sets_error_and_keeps_results() {
        let mut state = SearchPageState::new();
        let request = state.submit("mercy", SearchMode::Search).unwrap();
        state.apply(request.ticket, Ok(PageResponse::Results(vec![hadith("a", 0.5)])));

        let api = FakeApi {
            fail: true,
            ..FakeApi::default()
        };
        let request = state.submit("mercy", SearchMode::Search).unwrap();
        drive(&mut state, &api, request).await;

        assert_eq!(state.error(), Some(REQUEST_FAILED_MESSAGE));
        assert!(!state.is_loading());
        assert_eq!(state.results().len(), 1);

        // Resubmitting clears the banner.
        let _ = state.submit("mercy", SearchMode::Search);
        assert!(state.error().is_none());
    }

    #[tokio::test]
    async fn test_failed_question_keeps_previous_question_with_its_answer() {
        let answering = FakeApi {
            answer: Some(AnswerResponse {
                answer: "A1".to_string(),
                hadiths: vec![hadith("q", 0.6)],
            }),
            ..FakeApi::default()
        };
        let failing = FakeApi {
            fail: true,
            ..FakeApi::default()
        };
        let mut state = SearchPageState::new();

        let request = state.submit("Q1 about prayer", SearchMode::Question).unwrap();
        drive(&mut state, &answering, request).await;
        assert_eq!(state.shown_query(), "Q1 about prayer");

        let request = state.submit("Q2 about fasting", SearchMode::Question).unwrap();
        drive(&mut state, &failing, request).await;

        assert_eq!(state.error(), Some(REQUEST_FAILED_MESSAGE));
        assert_eq!(state.answer(), Some("A1"));
        assert_eq!(state.shown_query(), "Q1 about prayer");
        assert_eq!(state.query(), "Q2 about fasting");
    }

    #[tokio::test]
    async fn test_failed_search_after_question_keeps_question_labels() {
        let answering = FakeApi {
            answer: Some(AnswerResponse {
                answer: "A1".to_string(),
                hadiths: vec![hadith("k", 0.6)],
            }),
            ..FakeApi::default()
        };
        let failing = FakeApi {
            fail: true,
            ..FakeApi::default()
        };
        let mut state = SearchPageState::new();

        let request = state.submit("Why give?", SearchMode::Question).unwrap();
        drive(&mut state, &answering, request).await;

        let request = state.submit("charity", SearchMode::Search).unwrap();
        drive(&mut state, &failing, request).await;

        assert_eq!(state.results()[0].hadith_id, "k");
        assert_eq!(state.results_heading(), "1 Related Hadiths");
        assert!(!state.show_filter_panel());
        assert_eq!(state.shown_query(), "Why give?");
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = SearchPageState::new();
        let slow = state.submit("first", SearchMode::Search).unwrap();
        let fast = state.submit("second", SearchMode::Search).unwrap();

        assert!(state.apply(fast.ticket, Ok(PageResponse::Results(vec![hadith("new", 0.9)]))));
        assert!(!state.apply(slow.ticket, Ok(PageResponse::Results(vec![hadith("old", 0.1)]))));

        assert_eq!(state.query(), "second");
        assert_eq!(state.results()[0].hadith_id, "new");
        assert_eq!(state.phase(), &Phase::ResultsShown);
    }

    #[test]
    fn test_stale_failure_does_not_clobber_loading() {
        let mut state = SearchPageState::new();
        let slow = state.submit("first", SearchMode::Search).unwrap();
        let _pending = state.submit("second", SearchMode::Search).unwrap();

        assert!(!state.apply(slow.ticket, Err(ApiError::RequestFailed("reset".to_string()))));
        assert!(state.is_loading());
        assert!(state.error().is_none());
    }
}
