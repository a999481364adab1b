//! Details overlay component renderer.
//!
//! Draws a framed card over the lists:
//!
//! ```text
//! ╭──────────────────────────────────────── × ╮
//! │ Republic of South Africa                  │
//! │ South Africa                              │
//! │ https://flagcdn.com/w320/za.png           │
//! │                                           │
//! │ Capital      Pretoria                     │
//! │ Population   59,308,690                   │
//! ╰───────────────────────────────────────────╯
//! ```

use crate::ui::helpers::{display_width, pad, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailsCard;

const MAX_CARD_WIDTH: usize = 64;
const LABEL_WIDTH: usize = 12;

/// Renders the card with its top edge at `row`, horizontally centered.
pub fn render_details(out: &mut String, row: usize, card: &DetailsCard, theme: &Theme, cols: usize) -> usize {
    let width = cols.saturating_sub(4).min(MAX_CARD_WIDTH);
    let inner = width.saturating_sub(2);
    let left = cols.saturating_sub(width) / 2 + 1;
    let frame = Theme::fg(&theme.colors.overlay_border);
    let fill = theme.colors.overlay_bg.as_deref().map(Theme::bg).unwrap_or_default();

    let mut lines: Vec<(String, String)> = Vec::new();
    lines.push((format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg)), card.title.clone()));
    if let Some(subtitle) = &card.subtitle {
        lines.push((Theme::fg(&theme.colors.text_normal), subtitle.clone()));
    }
    lines.push((Theme::fg(&theme.colors.text_dim), card.flag_url.clone()));
    if !card.rows.is_empty() {
        lines.push((String::new(), String::new()));
    }
    for detail in &card.rows {
        lines.push((
            Theme::fg(&theme.colors.text_normal),
            format!("{:<width$}{}", detail.label, detail.value, width = LABEL_WIDTH),
        ));
    }

    let close = " × ";
    position_cursor(out, row, left);
    out.push_str(&fill);
    out.push_str(&frame);
    out.push('╭');
    out.push_str(&"─".repeat(inner.saturating_sub(display_width(close) + 1)));
    out.push_str(close);
    out.push('─');
    out.push('╮');
    out.push_str(Theme::reset());

    let mut current_row = row + 1;
    for (style, text) in &lines {
        let text = truncate(text, inner.saturating_sub(2));
        position_cursor(out, current_row, left);
        out.push_str(&fill);
        out.push_str(&frame);
        out.push_str("│ ");
        out.push_str(style);
        out.push_str(&text);
        out.push_str(Theme::reset());
        out.push_str(&fill);
        pad(out, inner.saturating_sub(display_width(&text) + 1));
        out.push_str(&frame);
        out.push('│');
        out.push_str(Theme::reset());
        current_row += 1;
    }

    position_cursor(out, current_row, left);
    out.push_str(&fill);
    out.push_str(&frame);
    out.push('╰');
    out.push_str(&"─".repeat(inner));
    out.push('╯');
    out.push_str(Theme::reset());

    current_row + 1
}
