//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: `AppState` → `UIViewModel`
//! 2. **Component Rendering**: `UIViewModel` → one ANSI frame
//!
//! The frame is built in memory and written to the terminal in one go, which
//! keeps partial frames off the screen while a search result lands.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Clears the screen and homes the cursor.
const CLEAR_SCREEN: &str = "\u{1b}[2J\u{1b}[H";

/// Renders the application into an ANSI frame.
///
/// # Parameters
///
/// * `state` - Current application state
/// * `rows` - Terminal height in rows
/// * `cols` - Terminal width in columns
#[must_use]
pub fn render(state: &AppState, rows: usize, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(rows, cols);
    render_viewmodel(&viewmodel, &state.theme, rows, cols)
}

/// Renders a pre-computed view model into an ANSI frame.
#[must_use]
pub fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> String {
    let mut frame = String::with_capacity(rows * cols * 2);
    frame.push_str(CLEAR_SCREEN);
    components::render_layout(&mut frame, vm, theme, cols, rows);
    frame
}
