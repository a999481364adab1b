//! Side effects emitted by the event handler.
//!
//! The handler mutates in-memory state synchronously and returns [`Action`]s for
//! anything that needs the network. The runtime executes them in order with
//! [`execute`](super::executor::execute), awaiting each one before the next
//! event is handled.

use crate::domain::Country;

/// Commands executed by the runtime after an event has been handled.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replaces the local selection with the backend's list.
    ///
    /// Issued once at startup.
    LoadSelection,

    /// Persists a search result into the selection.
    PersistSelection(Country),

    /// Deletes an entry from the selection.
    DeleteSelection(Country),

    /// Stops the event loop.
    Quit,
}
