use dioxus::prelude::*;

/// Shown when a completed search returned nothing
#[component]
pub fn EmptyState() -> Element {
    rsx! {
        section { class: "hs-empty-state",
            div { class: "hs-empty-card",
                h2 { class: "hs-empty-title", "No hadiths found matching your query." }
                p { class: "hs-empty-text", "Try adjusting your search terms or filters." }
            }
        }
    }
}
