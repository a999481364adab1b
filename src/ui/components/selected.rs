//! Selected countries component renderer.

use crate::ui::helpers::{display_width, pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{SelectedItem, SelectedPanel};

/// Renders the selected section starting at `row`.
///
/// Shows the error line above the list, the empty message when there is nothing
/// selected, and a "more above" marker when the head of the list was cut.
pub fn render_selected(out: &mut String, row: usize, panel: &SelectedPanel, theme: &Theme, cols: usize) -> usize {
    let mut current_row = super::render_section_title(out, row, &panel.title, theme);

    if let Some(error) = &panel.error {
        current_row = super::render_message(out, current_row, error, &theme.colors.error_fg);
    }
    if let Some(message) = panel.empty_message {
        current_row = super::render_message(out, current_row, message, &theme.colors.status_fg);
    }
    if panel.hidden_above > 0 {
        let marker = format!("… {} more above", panel.hidden_above);
        current_row = super::render_message(out, current_row, &marker, &theme.colors.text_dim);
    }

    for item in &panel.items {
        current_row = render_selected_row(out, current_row, item, theme, cols);
    }
    current_row
}

fn render_selected_row(out: &mut String, row: usize, item: &SelectedItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);

    let label = format!(" {:>2}. {}", item.number, item.name);
    let code = format!(" ({})", item.code);

    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push_str(&label);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&code);
    pad(out, cols.saturating_sub(display_width(&label) + display_width(&code) + 2));
    out.push_str(&Theme::fg(&theme.colors.remove_badge_fg));
    out.push_str("x ");
    out.push_str(Theme::reset());
    row + 1
}
