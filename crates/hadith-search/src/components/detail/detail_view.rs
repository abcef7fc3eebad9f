use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use hadith_core::detail::{self, DetailMatch, DetailState};
use hadith_core::presentation::{
    detail_chapter_line, is_high_relevance, metadata_rows, score_percent, score_ring_dasharray,
    source_initial,
};
use hadith_core::Hadith;

use crate::components::{use_hadith_api, use_navigation_carry};
use crate::routes::Route;

/// Detail page for `/hadith/:id`.
///
/// Keyed by id, so following a link to another hadith remounts the page and
/// resolves again instead of reusing the previous state.
#[component]
pub fn HadithDetailView(id: String) -> Element {
    rsx! {
        HadithDetail { key: "{id}", id: id.clone() }
    }
}

#[component]
fn HadithDetail(id: String) -> Element {
    let api = use_hadith_api();
    let carried = use_navigation_carry();

    // Resolved once per mount; the task is dropped with the page.
    let resolution = use_resource(move || {
        let api = api.clone();
        let id = id.clone();
        let carried = carried.peek().clone();
        async move {
            debug!("Resolving hadith '{}'", id);
            detail::resolve(&api, &id, carried.as_ref()).await
        }
    });

    let state = resolution.read().clone().unwrap_or(DetailState::Loading);

    match state {
        DetailState::Loading => rsx! {
            section { class: "hs-detail hs-detail--loading",
                div { class: "hs-spinner", "aria-label": "Loading" }
                p { class: "hs-detail-status", "Loading hadith…" }
            }
        },
        DetailState::Loaded { hadith, matched } => rsx! {
            LoadedHadith { hadith, matched }
        },
        other => {
            let message = other.message().unwrap_or_default().to_string();
            rsx! {
                section { class: "hs-detail hs-detail--missing",
                    div { class: "hs-alert", role: "alert",
                        p { class: "hs-alert-text", "{message}" }
                    }
                    BackToSearch {}
                }
            }
        }
    }
}

/// Navigates back, or to the search page when there is no history to return to.
#[component]
fn BackToSearch() -> Element {
    let navigator = use_navigator();

    rsx! {
        button {
            class: "hs-btn hs-btn--ghost hs-back",
            onclick: move |_| {
                if navigator.can_go_back() {
                    navigator.go_back();
                } else {
                    navigator.push(Route::SearchView {});
                }
            },
            "← Back to search"
        }
    }
}

#[component]
fn LoadedHadith(hadith: Hadith, matched: DetailMatch) -> Element {
    let metadata = &hadith.metadata;
    let initial = source_initial(metadata);
    let source = metadata.source_name().unwrap_or_default();
    let number = metadata.hadith_no.as_ref().map(ToString::to_string);
    let chapter = detail_chapter_line(metadata);
    let rows = metadata_rows(metadata);
    let percent = score_percent(hadith.score);
    let high_relevance = is_high_relevance(hadith.score);
    let dasharray = score_ring_dasharray(hadith.score);

    rsx! {
        article { class: "hs-detail",
            BackToSearch {}

            if matched == DetailMatch::FirstResult {
                p { class: "hs-detail-notice",
                    "No exact match for this link; showing the closest result."
                }
            }

            header { class: "hs-detail-header",
                div { class: "hs-avatar hs-avatar--lg", "{initial}" }
                div { class: "hs-detail-heading",
                    h1 { class: "hs-detail-source", "{source}" }
                    div { class: "hs-pills",
                        if let Some(number) = number {
                            span { class: "hs-pill", "Hadith No. {number}" }
                        }
                        if high_relevance {
                            span { class: "hs-pill hs-pill--accent", "High Relevance" }
                        }
                    }
                    if let Some(chapter) = chapter {
                        p { class: "hs-card-chapter", "{chapter}" }
                    }
                }
                div { class: "hs-score-ring",
                    svg {
                        view_box: "0 0 100 100",
                        width: "96",
                        height: "96",
                        circle {
                            class: "hs-score-ring-track",
                            cx: "50",
                            cy: "50",
                            r: "40",
                            fill: "none",
                            stroke_width: "8",
                        }
                        circle {
                            class: "hs-score-ring-value",
                            cx: "50",
                            cy: "50",
                            r: "40",
                            fill: "none",
                            stroke_width: "8",
                            stroke_dasharray: "{dasharray}",
                            transform: "rotate(-90 50 50)",
                        }
                    }
                    span { class: "hs-score-ring-label", "{percent}%" }
                }
            }

            p { class: "hs-detail-text", "{hadith.text}" }

            if !rows.is_empty() {
                section { class: "hs-metadata",
                    h2 { class: "hs-metadata-title", "Details" }
                    dl { class: "hs-metadata-list",
                        for (label, value) in rows {
                            div { key: "{label}", class: "hs-metadata-row",
                                dt { class: "hs-metadata-key", "{label}" }
                                dd { class: "hs-metadata-value", "{value}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
