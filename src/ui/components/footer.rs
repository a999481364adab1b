//! Footer component renderer.

use crate::ui::helpers::{display_width, pad, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the command hints centered at `row`.
///
/// Hints wider than the terminal are truncated so the layout never wraps.
pub fn render_footer(out: &mut String, row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text = truncate(&footer.keybindings, cols);
    let text_len = display_width(&help_text);
    let padding = cols.saturating_sub(text_len) / 2;

    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    pad(out, padding);
    out.push_str(&help_text);
    pad(out, cols.saturating_sub(padding + text_len));
    out.push_str(Theme::reset());
    row + 1
}
