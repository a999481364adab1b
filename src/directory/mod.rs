//! Remote country directory.
//!
//! This module covers everything the application knows about the two remote
//! collaborators: the public name-search endpoint and the backend that persists
//! the selected list.
//!
//! # Modules
//!
//! - `backend`: the [`CountryDirectory`] trait
//! - `http`: the `reqwest` implementation
//! - `models`: upstream record types and their normalization into [`Country`](crate::domain::Country)
//! - `ranking`: prefix-first, locale-aware result ordering

pub mod backend;
pub mod http;
pub mod models;
pub mod ranking;

#[cfg(test)]
pub(crate) mod testing;

pub use backend::CountryDirectory;
pub use http::HttpDirectory;
pub use models::{normalize_records, RawCountry};
pub use ranking::{rank_results, MAX_RESULTS};
