//! Executes [`Action`]s against the application state.
//!
//! Actions run strictly one after another and each is awaited to completion, so
//! two selection changes for the same code can never overlap.

use crate::app::{Action, AppState};
use crate::selection::SyncOutcome;
use tracing::Instrument;

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Executes one action.
pub async fn execute(state: &mut AppState, action: Action) -> Flow {
    let span = tracing::debug_span!("execute_action", action = ?action);

    async {
        let outcome = match &action {
            Action::LoadSelection => state.selection.load().await,
            Action::PersistSelection(country) => state.selection.add(country).await,
            Action::DeleteSelection(country) => state.selection.remove(country).await,
            Action::Quit => return Flow::Exit,
        };
        if outcome == SyncOutcome::Failed {
            tracing::warn!(error = ?state.selection.error(), "selection sync failed");
        }
        Flow::Continue
    }
    .instrument(span)
    .await
}

/// Executes actions in order, stopping at the first [`Flow::Exit`].
pub async fn execute_all(state: &mut AppState, actions: Vec<Action>) -> Flow {
    for action in actions {
        if execute(state, action).await == Flow::Exit {
            return Flow::Exit;
        }
    }
    Flow::Continue
}
