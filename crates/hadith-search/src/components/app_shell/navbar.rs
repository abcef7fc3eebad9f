use dioxus::prelude::*;

use crate::routes::Route;

/// Top navigation bar with the brand link home.
#[component]
pub fn NavBar() -> Element {
    rsx! {
        header { class: "hs-navbar",
            div { class: "hs-navbar-inner",
                Link { class: "hs-brand", to: Route::SearchView {},
                    span { class: "hs-brand-mark", "ح" }
                    span { class: "hs-brand-name", "Hadees Search" }
                }
            }
        }
    }
}
