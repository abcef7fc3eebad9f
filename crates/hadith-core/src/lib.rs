//! # Hadith Core
//!
//! Platform-independent library behind the Hadees Search client.
//!
//! The search, ranking and question-answering engine lives in a separate
//! backend service. This crate holds everything the client does on its own
//! side of that HTTP boundary, so it can be exercised without a UI runtime:
//!
//! ## Modules
//!
//! - [`api`] - HTTP client wrapper (`/search` and `/answer`) behind the [`api::HadithApi`] trait
//! - [`types`] - Hadith entities, filters and search modes as they travel over the wire
//! - [`search_page`] - Search page state machine with request fencing
//! - [`detail`] - Detail view resolution (navigation state or re-fetch by id)
//! - [`presentation`] - Display policy: truncation, score buckets, metadata rows
//! - [`config`] - Base URL resolution and presentation constants
//! - [`error`] - Error types for backend calls

#![forbid(unsafe_code)]

pub mod api;
pub mod config;
pub mod detail;
pub mod error;
pub mod presentation;
pub mod search_page;
pub mod types;

pub use api::{HadithApi, HttpHadithApi};
pub use config::ApiConfig;
pub use error::ApiError;
pub use types::{AnswerResponse, Hadith, HadithMetadata, MetadataValue, SearchFilters, SearchMode};
