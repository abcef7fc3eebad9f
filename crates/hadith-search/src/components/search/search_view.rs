use dioxus::logger::tracing::{debug, info};
use dioxus::prelude::*;
use hadith_core::search_page::{run_request, PageRequest, SearchPageState};
use hadith_core::{SearchFilters, SearchMode};

use crate::components::use_hadith_api;

use super::{AnswerPanel, EmptyState, FilterPanel, HadithCard, SearchBox, SkeletonHadithCard};

/// Number of placeholder cards shown while a request is in flight.
const SKELETON_CARDS: usize = 3;

/// Search page: owns the page state and runs its requests.
///
/// Every request gets a ticket from [`SearchPageState`]; a response whose
/// ticket is no longer the latest is dropped, so quick successive submissions
/// never let an older reply overwrite a newer one. Tasks are spawned in this
/// component's scope and are cancelled when the page unmounts.
#[component]
pub fn SearchView() -> Element {
    let api = use_hadith_api();
    let mut page = use_signal(SearchPageState::new);

    let dispatch = use_callback(move |request: PageRequest| {
        let api = api.clone();
        spawn(async move {
            let outcome = run_request(&api, &request.kind).await;
            if page.write().apply(request.ticket, outcome) {
                info!("Request #{} rendered", request.ticket);
            } else {
                debug!("Dropped superseded response #{}", request.ticket);
            }
        });
    });

    let handle_search = move |(query, mode): (String, SearchMode)| {
        let request = page.write().submit(&query, mode);
        if let Some(request) = request {
            dispatch.call(request);
        }
    };

    let handle_filter_change = move |filters: SearchFilters| {
        let request = page.write().change_filters(filters);
        if let Some(request) = request {
            dispatch.call(request);
        }
    };

    let handle_clear_filters = move |_: ()| {
        let request = page.write().clear_filters();
        if let Some(request) = request {
            dispatch.call(request);
        }
    };

    let state = page.read();
    let loading = state.is_loading();
    let error = state.error().map(str::to_string);
    let show_filters = state.show_filter_panel();
    let filters = state.filters().clone();
    let answer = state.answer().map(str::to_string);
    let question = state.shown_query().to_string();
    let results = state.results().to_vec();
    let heading = state.results_heading();
    let show_no_results = state.show_no_results();
    drop(state);

    let layout_class = if show_filters {
        "hs-results-layout hs-results-layout--with-filters"
    } else {
        "hs-results-layout"
    };

    rsx! {
        div { class: "hs-search-view",
            section { class: "hs-hero",
                h1 { class: "hs-hero-title", "Hadees Search" }
                p { class: "hs-hero-subtitle",
                    "Search the authentic collections or ask a question and get an answer grounded in hadith."
                }
                SearchBox { on_search: handle_search, searching: loading }
            }

            if let Some(message) = error {
                div { class: "hs-alert", role: "alert",
                    p { class: "hs-alert-text", "{message}" }
                }
            }

            if loading {
                section { class: "hs-results",
                    for i in 0..SKELETON_CARDS {
                        SkeletonHadithCard { key: "{i}" }
                    }
                }
            } else {
                div { class: "{layout_class}",
                    if show_filters {
                        aside { class: "hs-results-sidebar",
                            FilterPanel {
                                filters,
                                on_filter_change: handle_filter_change,
                                on_clear: handle_clear_filters,
                            }
                        }
                    }

                    section { class: "hs-results",
                        AnswerPanel { answer, question }

                        if !results.is_empty() {
                            h2 { class: "hs-results-heading", "{heading}" }
                            for hadith in results {
                                HadithCard { key: "{hadith.hadith_id}", hadith }
                            }
                        } else if show_no_results {
                            EmptyState {}
                        }
                    }
                }
            }
        }
    }
}
