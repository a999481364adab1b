//! Error types for the country picker.
//!
//! This module defines the centralized error type [`CountryError`] and a type alias
//! [`Result`] used throughout the crate. Remote failures carry the [`Operation`]
//! that produced them so the view-models can turn them into a scoped,
//! human-readable message without inspecting transport details.

use std::fmt;
use thiserror::Error;

/// The remote call an error originated from.
///
/// Each operation owns exactly one user-facing failure message. Search errors and
/// selection errors are stored in separate slots, so the operation also tells the
/// caller which slot a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Name search against the public country directory.
    Search,
    /// Fetching the persisted selection list.
    LoadSelected,
    /// Persisting a newly selected country.
    SaveSelected,
    /// Deleting a country from the persisted selection.
    RemoveSelected,
}

impl Operation {
    /// Message shown to the user when this operation fails.
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::Search => "Search failed.",
            Self::LoadSelected => "Failed to load selected countries.",
            Self::SaveSelected => "Failed to save selected country.",
            Self::RemoveSelected => "Failed to remove selected country.",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Search => "search by name",
            Self::LoadSelected => "load selected countries",
            Self::SaveSelected => "save selected country",
            Self::RemoveSelected => "remove selected country",
        };
        f.write_str(name)
    }
}

/// The main error type for country picker operations.
///
/// # Examples
///
/// ```
/// use country_picker::domain::{CountryError, Operation};
///
/// let err = CountryError::network(Operation::SaveSelected, Some(500), "internal error");
/// assert_eq!(err.user_message(), "Failed to save selected country.");
/// assert!(!err.is_cancelled());
/// ```
#[derive(Debug, Error)]
pub enum CountryError {
    /// A remote call failed.
    ///
    /// Covers non-success HTTP statuses (`status` is set), transport failures and
    /// response bodies that could not be decoded (`status` is `None`).
    #[error("{operation} failed{}: {detail}", status_suffix(.status))]
    Network {
        /// Which remote call failed.
        operation: Operation,
        /// HTTP status, when the server answered.
        status: Option<u16>,
        /// Transport or decoding detail for logs.
        detail: String,
    },

    /// The request was superseded before it completed.
    ///
    /// Never surfaced to the user.
    #[error("request cancelled")]
    Cancelled,

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" with HTTP status {s}")).unwrap_or_default()
}

impl CountryError {
    /// Builds a [`CountryError::Network`].
    pub fn network(operation: Operation, status: Option<u16>, detail: impl Into<String>) -> Self {
        Self::Network {
            operation,
            status,
            detail: detail.into(),
        }
    }

    /// Returns `true` for superseded requests.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Converts the error into the message stored in a feature's error slot.
    ///
    /// A search answered with any HTTP error status means the directory had no
    /// match for the query, so it reads "No matching results." rather than a
    /// generic failure.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network {
                operation: Operation::Search,
                status: Some(_),
                ..
            } => "No matching results.".to_string(),
            Self::Network { operation, .. } => operation.failure_message().to_string(),
            Self::Cancelled => String::new(),
            other => other.to_string(),
        }
    }
}

/// A specialized `Result` type for country picker operations.
pub type Result<T> = std::result::Result<T, CountryError>;
