//! UI components for Hadees Search.
//!
//! - `app_shell`: NavBar, Footer, and the routed [`AppShell`] layout
//! - `search`: SearchView, SearchBox, FilterPanel, AnswerPanel, HadithCard
//! - `detail`: HadithDetailView
//!
//! # Context Providers
//!
//! [`App`] provides two values to the whole tree:
//!
//! ```ignore
//! // Client for the search API
//! let api = use_hadith_api();
//!
//! // Hadith handed from a result card to the detail route
//! let carried = use_navigation_carry();
//! ```

mod app_shell;
mod detail;
pub mod search;

pub use app_shell::{AppShell, Footer, NavBar, PageNotFound};
pub use detail::HadithDetailView;
pub use search::SearchView;

use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use hadith_core::{ApiConfig, Hadith, HttpHadithApi};

use crate::routes::Route;

/// Hadith selected on the search page, read by the detail route.
///
/// Plays the role of browser navigation state: set right before navigating,
/// only trusted by the detail view when its id matches the route.
#[derive(Clone, Copy)]
pub struct NavigationCarry(pub Signal<Option<Hadith>>);

/// Hook to access the API client from any component below [`App`].
pub fn use_hadith_api() -> HttpHadithApi {
    use_context::<HttpHadithApi>()
}

/// Hook to access the navigation carry.
pub fn use_navigation_carry() -> Signal<Option<Hadith>> {
    use_context::<NavigationCarry>().0
}

/// Root component: resolves the API configuration and mounts the router.
#[component]
pub fn App() -> Element {
    let carried = use_signal(|| None::<Hadith>);
    use_context_provider(|| NavigationCarry(carried));

    let client = use_hook(|| {
        let config = ApiConfig::from_env();
        info!("Using search API at {}", config.base_url());
        HttpHadithApi::new(&config).map_err(|e| {
            error!("Invalid API configuration: {}", e);
            String::from(e)
        })
    });

    match client {
        Ok(api) => rsx! {
            ApiScope { api }
        },
        Err(message) => rsx! {
            section { class: "hs-fatal",
                h1 { class: "hs-fatal-title", "Hadees Search is misconfigured" }
                p { class: "hs-fatal-text", "{message}" }
            }
        },
    }
}

/// Provides the client to the routed tree.
#[component]
fn ApiScope(api: HttpHadithApi) -> Element {
    use_context_provider(|| api);

    rsx! {
        Router::<Route> {}
    }
}
