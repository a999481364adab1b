//! Search results component renderer.
//!
//! Renders the "Search Results" title, the status or error line and one row per
//! result:
//!
//! ```text
//!  1. United Kingdom (GBR)                                  +
//!  2. United States (USA)                            selected
//! ```
//!
//! The row whose details are open uses the selection colors across the full
//! width; other rows highlight the characters matched by the query.

use crate::ui::helpers::{display_width, pad, position_cursor, render_highlighted_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ResultItem, ResultsPanel};

/// Renders the results section starting at `row`.
///
/// # Returns
///
/// The next available row position, after a trailing blank line.
pub fn render_results(out: &mut String, row: usize, panel: &ResultsPanel, theme: &Theme, cols: usize) -> usize {
    let mut current_row = super::render_section_title(out, row, "Search Results", theme);

    if let Some(status) = &panel.status {
        current_row = super::render_message(out, current_row, status, &theme.colors.status_fg);
    }
    if let Some(error) = &panel.error {
        current_row = super::render_message(out, current_row, error, &theme.colors.error_fg);
    }

    for item in &panel.items {
        current_row = render_result_row(out, current_row, item, theme, cols);
    }

    current_row + 1
}

fn render_result_row(out: &mut String, row: usize, item: &ResultItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);

    let base = if item.is_active {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };
    out.push_str(&base);

    let number = format!(" {:>2}. ", item.number);
    out.push_str(&number);
    if item.is_active {
        out.push_str(&item.name);
    } else {
        render_highlighted_text(out, &item.name, &item.highlight_ranges, theme, &base);
    }

    let code = format!(" ({})", item.code);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&code);
    out.push_str(&base);

    let badge = item.badge();
    let used = display_width(&number) + display_width(&item.name) + display_width(&code);
    pad(out, cols.saturating_sub(used + badge.len() + 1));

    let badge_color = if item.is_selected {
        &theme.colors.selected_badge_fg
    } else {
        &theme.colors.add_badge_fg
    };
    if !item.is_active {
        out.push_str(&Theme::fg(badge_color));
    }
    out.push_str(badge);
    out.push(' ');
    out.push_str(Theme::reset());
    row + 1
}
