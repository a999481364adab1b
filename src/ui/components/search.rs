//! Search bar component renderer.

use crate::ui::helpers::{display_width, pad, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the 3-line search box starting at `row`.
///
/// ```text
/// [margin] ┌─────────────────────────┐ [margin]
/// [margin] │ Search: {query}         │ [margin]
/// [margin] └─────────────────────────┘ [margin]
/// ```
///
/// An empty query shows the placeholder in the dim color instead.
///
/// # Returns
///
/// The next available row position (row + 3)
pub fn render_search_bar(out: &mut String, row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = Theme::fg(&theme.colors.search_bar_border);

    position_cursor(out, row, 1);
    pad(out, SEARCH_BOX_MARGIN);
    out.push_str(&border);
    out.push('┌');
    out.push_str(&"─".repeat(inner_width));
    out.push('┐');
    out.push_str(Theme::reset());

    let (text, color) = if search.query.is_empty() {
        (format!(" {}", search.placeholder), &theme.colors.text_dim)
    } else {
        (format!(" Search: {}", search.query), &theme.colors.text_normal)
    };
    let text = truncate(&text, inner_width);

    position_cursor(out, row + 1, 1);
    pad(out, SEARCH_BOX_MARGIN);
    out.push_str(&border);
    out.push('│');
    out.push_str(&Theme::fg(color));
    out.push_str(&text);
    pad(out, inner_width.saturating_sub(display_width(&text)));
    out.push_str(&border);
    out.push('│');
    out.push_str(Theme::reset());

    position_cursor(out, row + 2, 1);
    pad(out, SEARCH_BOX_MARGIN);
    out.push_str(&border);
    out.push('└');
    out.push_str(&"─".repeat(inner_width));
    out.push('┘');
    out.push_str(Theme::reset());

    row + 3
}
