//! Client-side routes.
//!
//! Purely structural: both pages render inside the [`AppShell`] layout and
//! carry no logic of their own here.

use dioxus::prelude::*;

use crate::components::{AppShell, HadithDetailView, PageNotFound, SearchView};

#[derive(Debug, Clone, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppShell)]
        #[route("/")]
        SearchView {},
        #[route("/hadith/:id")]
        HadithDetailView { id: String },
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

impl Route {
    /// Detail route for a hadith id.
    pub fn detail(id: impl Into<String>) -> Self {
        Route::HadithDetailView { id: id.into() }
    }
}
