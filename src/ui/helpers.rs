//! Shared rendering utilities and helpers.
//!
//! Low-level pieces used by several components: cursor positioning, match
//! highlighting, width-aware truncation and the number formats used by the
//! details card.
//!
//! All widths are measured in `char`s; country names are short and the
//! terminal front-end does not attempt grapheme-cluster layout.

use crate::ui::theme::Theme;
use std::fmt::Write;

/// Appends an ANSI cursor-position sequence (`\u{1b}[{row};{col}H`).
///
/// Coordinates are 1-indexed.
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    let _ = write!(out, "\u{1b}[{row};{col}H");
}

/// Appends `count` spaces.
pub fn pad(out: &mut String, count: usize) {
    out.extend(std::iter::repeat(' ').take(count));
}

/// Number of `char`s in `text`.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Shortens `text` to at most `width` chars, ending in `...` when cut.
///
/// # Example
///
/// ```rust
/// use country_picker::ui::helpers::truncate;
///
/// assert_eq!(truncate("South Georgia", 8), "South...");
/// assert_eq!(truncate("Chad", 8), "Chad");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }
    let mut cut: String = text.chars().take(width - 3).collect();
    cut.push_str("...");
    cut
}

/// Appends `text` with the given character ranges highlighted.
///
/// `restore` is the style escape of the surrounding row; it is re-applied after
/// every highlighted segment. Ranges past the end of `text` are clipped.
pub fn render_highlighted_text(
    out: &mut String,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    restore: &str,
) {
    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.max(current_pos).min(chars.len());
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }

        out.extend(&chars[current_pos..start]);
        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        out.push_str(restore);

        current_pos = end;
    }

    out.extend(&chars[current_pos..]);
}

/// Formats an integer with `,` thousands separators.
///
/// # Example
///
/// ```rust
/// use country_picker::ui::helpers::format_thousands;
///
/// assert_eq!(format_thousands(59_308_690), "59,308,690");
/// assert_eq!(format_thousands(999), "999");
/// ```
#[must_use]
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }
    formatted
}

/// Formats an area in square kilometres: grouped integer part, at most three
/// fraction digits, trailing zeros dropped, `km²` suffix.
///
/// Negative and NaN areas are clamped to zero.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_area(area: f64) -> String {
    let millis = (area.max(0.0) * 1000.0).round() as u64;
    let whole = format_thousands(millis / 1000);
    let fraction = millis % 1000;

    let number = if fraction == 0 {
        whole
    } else {
        let digits = format!("{fraction:03}");
        format!("{whole}.{}", digits.trim_end_matches('0'))
    };
    format!("{number} km²")
}
