//! Line-oriented command parsing.
//!
//! Each line read from the terminal becomes at most one [`Event`]. Lines that do
//! not start with `:` are search text; `:`-prefixed lines are commands with
//! one-based positions as shown in the rendered lists.
//!
//! | Line | Event |
//! |---|---|
//! | any text | `QueryChanged(text)` |
//! | `:clear` | `QueryChanged("")` |
//! | `:add N` | `AddResult(N - 1)` |
//! | `:rm N`, `:remove N` | `RemoveSelected(N - 1)` |
//! | `:show N`, `:inspect N` | `Inspect(N - 1)` |
//! | `:close` | `DismissDetails(CloseButton)` |
//! | `:esc`, a bare ESC byte | `DismissDetails(Escape)` |
//! | `:back` | `DismissDetails(ClickOutside)` |
//! | `:q`, `:quit` | `Quit` |

use crate::app::modes::DismissReason;
use crate::app::Event;

const ESCAPE: &str = "\u{1b}";

/// Parses one input line.
///
/// Returns `None` for unknown commands and for positions that are missing, zero
/// or not a number.
///
/// # Example
///
/// ```rust
/// use country_picker::app::{parse_command, Event};
///
/// assert_eq!(parse_command(":add 2"), Some(Event::AddResult(1)));
/// assert_eq!(parse_command("New Zealand"), Some(Event::QueryChanged("New Zealand".into())));
/// assert_eq!(parse_command(":add 0"), None);
/// ```
#[must_use]
pub fn parse_command(line: &str) -> Option<Event> {
    let line = line.trim_end_matches(['\r', '\n']);

    if line == ESCAPE {
        return Some(Event::DismissDetails(DismissReason::Escape));
    }

    let Some(command) = line.strip_prefix(':') else {
        return Some(Event::QueryChanged(line.to_string()));
    };

    let mut parts = command.split_whitespace();
    let name = parts.next()?;
    let position = parts.next().and_then(parse_position);
    if parts.next().is_some() {
        return None;
    }

    match name {
        "clear" => Some(Event::QueryChanged(String::new())),
        "add" => position.map(Event::AddResult),
        "rm" | "remove" => position.map(Event::RemoveSelected),
        "show" | "inspect" => position.map(Event::Inspect),
        "close" => Some(Event::DismissDetails(DismissReason::CloseButton)),
        "esc" => Some(Event::DismissDetails(DismissReason::Escape)),
        "back" => Some(Event::DismissDetails(DismissReason::ClickOutside)),
        "q" | "quit" => Some(Event::Quit),
        _ => None,
    }
}

fn parse_position(raw: &str) -> Option<usize> {
    raw.parse::<usize>().ok()?.checked_sub(1)
}
