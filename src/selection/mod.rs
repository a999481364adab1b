//! Persisted country selection.
//!
//! [`SelectionStore`] keeps the local list in sync with the backend and exposes an
//! O(1) membership check used by the result rows.

pub mod store;

pub use store::{SelectionStore, SyncOutcome};
