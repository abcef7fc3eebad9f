//! Hadees Search - web client for the hadith search and question-answering API.
//!
//! A Dioxus single-page application. Search, ranking and answer generation
//! all happen in the backend service; this crate composes the views and
//! wires them to the client and state machines in [`hadith_core`].
//!
//! # Views
//!
//! - `/` - search box, filter panel, answer panel and ranked hadith cards
//! - `/hadith/:id` - a single hadith in full
//!
//! # Platform Support
//!
//! - **Web (WASM)**: default feature; API base URL fixed at build time via `HADITH_API_URL`
//! - **Desktop**: `desktop` feature; `HADITH_API_URL` read at startup

#![forbid(unsafe_code)]

pub mod components;
pub mod routes;

pub use routes::Route;
