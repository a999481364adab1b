//! Country directory abstraction.
//!
//! This module defines the [`CountryDirectory`] trait that the search pipeline and
//! the selection store talk to. It covers both remote collaborators: the public
//! name-search endpoint and the backend that persists the selected list.
//!
//! # Design Philosophy
//!
//! The trait mirrors the four remote calls the application actually makes rather
//! than a generic REST client. The HTTP implementation lives in
//! [`HttpDirectory`](super::HttpDirectory); tests substitute a scripted fake.

use crate::domain::{Country, Result};
use crate::infrastructure::CancellationToken;
use async_trait::async_trait;

/// Remote source of countries and sink for the persisted selection.
///
/// Implementations must be shareable across tasks: the search pipeline clones an
/// `Arc<dyn CountryDirectory>` into every debounced search it spawns.
///
/// # Examples
///
/// ```no_run
/// use country_picker::directory::{CountryDirectory, HttpDirectory};
/// use country_picker::infrastructure::CancellationToken;
///
/// # async fn demo() -> country_picker::Result<()> {
/// let directory = HttpDirectory::new("http://localhost:8000/api", "https://restcountries.com/v3.1")?;
/// let results = directory.search_by_name("united", &CancellationToken::new()).await?;
/// assert!(results.len() <= 5);
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait CountryDirectory: Send + Sync {
    /// Searches the public directory by name.
    ///
    /// Returns at most five normalized countries, ranked so names starting with
    /// the trimmed query come first.
    ///
    /// # Errors
    ///
    /// Returns [`CountryError::Cancelled`](crate::domain::CountryError::Cancelled)
    /// if `cancel` fires before the response is complete, and
    /// [`CountryError::Network`](crate::domain::CountryError::Network) on a
    /// non-success status or transport failure.
    async fn search_by_name(&self, query: &str, cancel: &CancellationToken) -> Result<Vec<Country>>;

    /// Fetches the persisted selection list.
    ///
    /// # Errors
    ///
    /// Returns a network error on a non-success status or transport failure.
    async fn fetch_selected(&self) -> Result<Vec<Country>>;

    /// Persists a selected country and returns the backend's stored form.
    ///
    /// # Errors
    ///
    /// Returns a network error on a non-success status or transport failure.
    async fn persist_selected(&self, country: &Country) -> Result<Country>;

    /// Deletes a country from the persisted selection by its code.
    ///
    /// # Errors
    ///
    /// Returns a network error on a non-success status or transport failure.
    async fn delete_selected(&self, country: &Country) -> Result<()>;
}
