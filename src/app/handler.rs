//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point for user intents and pipeline
//! notifications. It mutates [`AppState`] synchronously and returns a render hint
//! plus the [`Action`]s the runtime must execute.
//!
//! # Event Types
//!
//! - **Search**: `QueryChanged`, `SearchUpdated`
//! - **Selection**: `AddResult`, `RemoveSelected`
//! - **Details overlay**: `Inspect`, `DismissDetails`
//! - **Lifecycle**: `Quit`
//!
//! Indices carried by events are zero-based positions in the list the user sees.
//! An index with no entry behind it is ignored.

use crate::app::modes::{DismissReason, Overlay};
use crate::app::{Action, AppState};
use crate::domain::error::Result;

/// User intents and pipeline notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The search input now holds this text.
    QueryChanged(String),
    /// Add the search result at this position to the selection.
    AddResult(usize),
    /// Remove the selected country at this position.
    RemoveSelected(usize),
    /// Open the details overlay for the search result at this position.
    Inspect(usize),
    /// Close the details overlay.
    DismissDetails(DismissReason),
    /// The search pipeline published a new state.
    SearchUpdated,
    /// Leave the application.
    Quit,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
///
/// # Returns
///
/// `(needs_render, actions)`. The actions are executed in order by the runtime.
/// Adding a result that is already selected yields no action at all.
///
/// # Errors
///
/// Currently infallible; the `Result` leaves room for handlers that validate
/// input against remote state.
///
/// # Example
///
/// ```rust
/// use country_picker::app::{handle_event, Action, AppState, Event};
/// use country_picker::directory::HttpDirectory;
/// use country_picker::ui::Theme;
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> country_picker::Result<()> {
/// let directory = Arc::new(HttpDirectory::new("http://localhost:8000/api", "https://restcountries.com/v3.1")?);
/// let mut state = AppState::new(directory, Duration::from_millis(300), Theme::default());
/// let (_, actions) = handle_event(&mut state, &Event::Quit)?;
/// assert_eq!(actions, vec![Action::Quit]);
/// # Ok(())
/// # }
/// ```
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::QueryChanged(query) => {
            state.search.set_query(query.clone());
            if query.trim().is_empty() && state.overlay.is_open() {
                tracing::debug!("query cleared, closing details");
                state.overlay = Overlay::Hidden;
            }
            Ok((true, vec![]))
        }
        Event::AddResult(index) => {
            let Some(country) = state.search.result(*index) else {
                tracing::debug!(index, "no search result at position");
                return Ok((false, vec![]));
            };
            if state.selection.contains(&country.code) {
                tracing::debug!(code = %country.code, "result already selected");
                return Ok((false, vec![]));
            }
            Ok((false, vec![Action::PersistSelection(country)]))
        }
        Event::RemoveSelected(index) => {
            let Some(country) = state.selection.get(*index).cloned() else {
                tracing::debug!(index, "no selected country at position");
                return Ok((false, vec![]));
            };
            Ok((false, vec![Action::DeleteSelection(country)]))
        }
        Event::Inspect(index) => {
            let Some(country) = state.search.result(*index) else {
                tracing::debug!(index, "no search result to inspect");
                return Ok((false, vec![]));
            };
            tracing::debug!(code = %country.code, "opening details");
            state.overlay = Overlay::Details(country);
            Ok((true, vec![]))
        }
        Event::DismissDetails(reason) => {
            if !state.overlay.is_open() {
                return Ok((false, vec![]));
            }
            tracing::debug!(?reason, "closing details");
            state.overlay = Overlay::Hidden;
            Ok((true, vec![]))
        }
        Event::SearchUpdated => Ok((true, vec![])),
        Event::Quit => {
            state.search.shutdown();
            Ok((false, vec![Action::Quit]))
        }
    }
}
