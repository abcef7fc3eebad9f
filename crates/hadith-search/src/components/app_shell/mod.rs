//! App shell components: NavBar, Footer and the layout wrapping every route.

mod footer;
mod navbar;

pub use footer::Footer;
pub use navbar::NavBar;

use dioxus::prelude::*;

use crate::routes::Route;

/// Persistent layout around the routed content.
#[component]
pub fn AppShell() -> Element {
    rsx! {
        div { class: "hs-app",
            NavBar {}
            main { class: "hs-main",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}

/// Fallback for paths that match no route.
#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        section { class: "hs-empty-state",
            div { class: "hs-empty-card",
                h2 { class: "hs-empty-title", "Page not found" }
                p { class: "hs-empty-text", "Nothing lives at /{path}." }
                Link { class: "hs-btn hs-btn--primary", to: Route::SearchView {}, "Back to search" }
            }
        }
    }
}
