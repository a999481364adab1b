//! Header component renderer.

use crate::ui::helpers::{display_width, pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title bar centered at `row`, padded to the full width.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_header(out: &mut String, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = display_width(&header.title);
    let padding = cols.saturating_sub(title_len) / 2;

    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        out.push_str(&Theme::bg(bg));
    }

    pad(out, padding);
    out.push_str(&header.title);
    pad(out, cols.saturating_sub(padding + title_len));

    out.push_str(Theme::reset());
    row + 1
}
