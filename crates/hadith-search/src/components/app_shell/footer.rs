use dioxus::prelude::*;

/// Footer with collection attribution
#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "hs-footer",
            span { class: "hs-footer-text",
                "Searching the Sahih al-Bukhari and Sahih Muslim collections."
            }
        }
    }
}
