//! Selected-countries view-model.
//!
//! The store mirrors the backend's persisted list. Every mutation is pessimistic:
//! the local list only changes after the backend has confirmed the call, and a
//! failed call leaves the list untouched with a message in the error slot.

use crate::directory::CountryDirectory;
use crate::domain::Country;
use std::collections::HashSet;
use std::sync::Arc;

/// Result of a store operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The backend confirmed the call and the local list was updated.
    Applied,
    /// Nothing to do, so no call was made.
    Skipped,
    /// The call failed; the error slot holds the message.
    Failed,
}

/// Ordered selection list with a derived membership set.
pub struct SelectionStore {
    directory: Arc<dyn CountryDirectory>,
    countries: Vec<Country>,
    codes: HashSet<String>,
    error: Option<String>,
}

impl std::fmt::Debug for SelectionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionStore")
            .field("countries", &self.countries)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl SelectionStore {
    #[must_use]
    pub fn new(directory: Arc<dyn CountryDirectory>) -> Self {
        Self {
            directory,
            countries: Vec::new(),
            codes: HashSet::new(),
            error: None,
        }
    }

    /// Replaces the local list with the backend's.
    ///
    /// Entries repeating an earlier code are dropped. On failure the list is
    /// emptied and the error slot set.
    pub async fn load(&mut self) -> SyncOutcome {
        tracing::debug!("loading selected countries");
        match self.directory.fetch_selected().await {
            Ok(countries) => {
                let mut seen = HashSet::new();
                self.countries = countries
                    .into_iter()
                    .filter(|c| seen.insert(c.code.clone()))
                    .collect();
                self.error = None;
                self.refresh_codes();
                tracing::debug!(count = self.countries.len(), "selection loaded");
                SyncOutcome::Applied
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to load selection");
                self.countries.clear();
                self.refresh_codes();
                self.error = Some(e.user_message());
                SyncOutcome::Failed
            }
        }
    }

    /// Persists `country` and appends the backend's stored value.
    ///
    /// Already-selected codes are skipped without a call.
    pub async fn add(&mut self, country: &Country) -> SyncOutcome {
        if self.contains(&country.code) {
            tracing::debug!(code = %country.code, "already selected, skipping");
            return SyncOutcome::Skipped;
        }

        self.error = None;
        match self.directory.persist_selected(country).await {
            Ok(stored) => {
                tracing::debug!(code = %stored.code, "selection saved");
                match self.countries.iter_mut().find(|c| c.code == stored.code) {
                    Some(existing) => *existing = stored,
                    None => self.countries.push(stored),
                }
                self.refresh_codes();
                SyncOutcome::Applied
            }
            Err(e) => {
                tracing::debug!(code = %country.code, error = %e, "failed to save selection");
                self.error = Some(e.user_message());
                SyncOutcome::Failed
            }
        }
    }

    /// Deletes `country` on the backend, then drops it locally.
    pub async fn remove(&mut self, country: &Country) -> SyncOutcome {
        self.error = None;
        match self.directory.delete_selected(country).await {
            Ok(()) => {
                tracing::debug!(code = %country.code, "selection removed");
                self.countries.retain(|c| c.code != country.code);
                self.refresh_codes();
                SyncOutcome::Applied
            }
            Err(e) => {
                tracing::debug!(code = %country.code, error = %e, "failed to remove selection");
                self.error = Some(e.user_message());
                SyncOutcome::Failed
            }
        }
    }

    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    #[must_use]
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Country> {
        self.countries.get(index)
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn refresh_codes(&mut self) {
        self.codes = self.countries.iter().map(|c| c.code.clone()).collect();
    }
}
