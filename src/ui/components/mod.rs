//! Composable UI component renderers.
//!
//! Each component appends ANSI-styled output for one part of the screen to a
//! frame buffer and returns the next free row.
//!
//! # Components
//!
//! - `header`: Title bar
//! - `search`: Search input box
//! - `results`: Search results with status line and badges
//! - `selected`: Selected countries list
//! - `details`: Details overlay card
//! - `footer`: Command hints

mod details;
mod footer;
mod header;
mod results;
mod search;
mod selected;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use details::render_details;
use footer::render_footer;
use header::render_header;
use results::render_results;
use search::render_search_bar;
use selected::render_selected;

/// First row the details card may use; it covers the lists, never the search box.
const DETAILS_TOP_ROW: usize = 8;

/// Renders a horizontal border line at `row` and returns `row + 1`.
fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    row + 1
}

fn render_section_title(out: &mut String, row: usize, title: &str, theme: &Theme) -> usize {
    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push(' ');
    out.push_str(title);
    out.push_str(Theme::reset());
    row + 1
}

fn render_message(out: &mut String, row: usize, message: &str, color: &str) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.push_str("   ");
    out.push_str(message);
    out.push_str(Theme::reset());
    row + 1
}

/// Renders the full layout.
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search Bar - 3 lines]
/// [Search Results]      only with a query
/// [Selected Countries]
/// [Border]
/// [Footer]
/// ```
///
/// The details card, when open, is drawn last so it sits on top of the lists.
pub fn render_layout(out: &mut String, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(out, current_row, &vm.header, theme, cols);
    current_row = render_border(out, current_row, &theme.colors.border, cols);
    current_row = render_search_bar(out, current_row, &vm.search_bar, theme, cols);
    if let Some(results) = &vm.results {
        current_row = render_results(out, current_row, results, theme, cols);
    }
    render_selected(out, current_row, &vm.selected, theme, cols);

    let footer_row = rows;
    let border_row = footer_row.saturating_sub(1);
    render_border(out, border_row, &theme.colors.border, cols);
    render_footer(out, footer_row, &vm.footer, theme, cols);

    if let Some(card) = &vm.details {
        render_details(out, DETAILS_TOP_ROW, card, theme, cols);
    }
}
