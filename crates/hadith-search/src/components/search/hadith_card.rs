use dioxus::prelude::*;
use hadith_core::presentation::{
    card_text, card_title, chapter_line, score_badge, source_initial,
};
use hadith_core::Hadith;

use crate::components::use_navigation_carry;
use crate::routes::Route;

/// Skeleton card shown while a request is in progress.
/// Mirrors the layout of [`HadithCard`] with animated placeholder blocks.
#[component]
pub fn SkeletonHadithCard() -> Element {
    rsx! {
        article { class: "hs-card hs-card--skeleton",
            header { class: "hs-card-header",
                div { class: "hs-avatar hs-skeleton-block" }
                div { class: "hs-card-heading",
                    div { class: "hs-skeleton-text hs-skeleton-text--title" }
                    div { class: "hs-skeleton-text hs-skeleton-text--md" }
                }
                span { class: "hs-skeleton-text hs-skeleton-text--sm" }
            }
            div { class: "hs-card-text",
                div { class: "hs-skeleton-text hs-skeleton-text--line" }
                div { class: "hs-skeleton-text hs-skeleton-text--line" }
                div { class: "hs-skeleton-text hs-skeleton-text--line hs-skeleton-text--short" }
            }
        }
    }
}

/// One search result with expand/collapse and a relevance badge.
#[component]
pub fn HadithCard(hadith: Hadith) -> Element {
    let mut expanded = use_signal(|| false);
    let mut carried = use_navigation_carry();
    let navigator = use_navigator();

    let (percent, bucket) = score_badge(&hadith);
    let badge_class = format!("hs-score-badge {}", bucket.css_class());
    let initial = source_initial(&hadith.metadata);
    let title = card_title(&hadith.metadata);
    let chapter = chapter_line(&hadith.metadata);
    let body = card_text(&hadith.text, expanded());
    let body_class = if expanded() {
        "hs-card-text hs-card-text--full"
    } else {
        "hs-card-text"
    };

    let for_details = hadith.clone();

    rsx! {
        article { class: "hs-card",
            header { class: "hs-card-header",
                div { class: "hs-avatar", "{initial}" }
                div { class: "hs-card-heading",
                    h3 { class: "hs-card-title", "{title}" }
                    p { class: "hs-card-chapter", "{chapter}" }
                }
                span { class: "{badge_class}", title: "Relevance", "{percent}%" }
            }

            p { class: "{body_class}", "{body}" }

            footer { class: "hs-card-footer",
                button {
                    class: "hs-btn hs-btn--ghost",
                    onclick: move |_| expanded.toggle(),
                    if expanded() {
                        "Show Less"
                    } else {
                        "Show Full Hadith"
                    }
                }
                button {
                    class: "hs-btn hs-btn--link",
                    onclick: move |_| {
                        let id = for_details.hadith_id.clone();
                        carried.set(Some(for_details.clone()));
                        navigator.push(Route::detail(id));
                    },
                    "View Details"
                }
            }
        }
    }
}
