//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by the
//! renderer. They contain no business logic, only display-ready data: truncated
//! names, one-based row numbers, highlight ranges and pre-formatted detail rows.

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub search_bar: SearchBarInfo,
    /// Search results section; `None` while the query is blank.
    pub results: Option<ResultsPanel>,
    pub selected: SelectedPanel,
    /// Details overlay; `None` while hidden.
    pub details: Option<DetailsCard>,
    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Command hints for the current overlay state.
    pub keybindings: String,
}

/// Search input box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Query text as typed.
    pub query: String,
    /// Hint shown while the query is empty.
    pub placeholder: &'static str,
}

/// The "Search Results" section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsPanel {
    /// Status line: "Loading results..." or "Searching...".
    pub status: Option<String>,
    /// Search error; when set, `items` is empty.
    pub error: Option<String>,
    pub items: Vec<ResultItem>,
}

/// One search result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
    /// One-based position used by `:add` and `:show`.
    pub number: usize,
    /// Display name, truncated to the available width.
    pub name: String,
    pub code: String,
    /// Whether the country is already in the selection.
    pub is_selected: bool,
    /// Whether this row's details are open.
    pub is_active: bool,
    /// Character ranges of `name` matched by the query, `(start, end)` exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

impl ResultItem {
    /// Action label shown at the end of the row.
    #[must_use]
    pub const fn badge(&self) -> &'static str {
        if self.is_selected {
            "selected"
        } else {
            "+"
        }
    }
}

/// The "Selected Countries" section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedPanel {
    pub title: String,
    pub error: Option<String>,
    /// Shown instead of rows when the selection is empty.
    pub empty_message: Option<&'static str>,
    /// Rows that did not fit above the visible tail of the list.
    pub hidden_above: usize,
    pub items: Vec<SelectedItem>,
}

/// One selected-country row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedItem {
    /// One-based position used by `:rm`.
    pub number: usize,
    pub name: String,
    pub code: String,
}

/// The details overlay card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsCard {
    /// Official name when known, otherwise the common name.
    pub title: String,
    /// Common name, when it differs from the title.
    pub subtitle: Option<String>,
    pub flag_url: String,
    /// Only attributes present on the country.
    pub rows: Vec<DetailRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}
