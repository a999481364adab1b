//! Application state and view model computation.
//!
//! [`AppState`] owns the two feature view-models (search and selection), the
//! details overlay and the theme. [`AppState::compute_viewmodel`] turns a snapshot
//! of all of them into a [`UIViewModel`] sized for the terminal.
//!
//! # Layout
//!
//! ```text
//!  1  blank
//!  2  header
//!  3  border
//!  4  ┌ search box ┐
//!  5  │            │
//!  6  └────────────┘
//!  7  Search Results       (only with a non-blank query)
//!     status / error
//!     result rows          (at most five)
//!     blank
//!     Selected Countries
//!     error
//!     selected rows        (tail of the list that fits)
//! -2  border
//! -1  footer
//! ```

use crate::app::modes::Overlay;
use crate::directory::CountryDirectory;
use crate::domain::Country;
use crate::search::{SearchPipeline, SearchState};
use crate::selection::SelectionStore;
use crate::ui::helpers::{format_area, format_thousands, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DetailRow, DetailsCard, FooterInfo, HeaderInfo, ResultItem, ResultsPanel, SearchBarInfo, SelectedItem,
    SelectedPanel, UIViewModel,
};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::sync::Arc;
use std::time::Duration;

/// Rows used by the header, search box, border and footer.
const CHROME_ROWS: usize = 8;

/// Columns reserved around a row name: number, separators and badge.
const ROW_DECORATION: usize = 18;

const SEARCH_PLACEHOLDER: &str = "Start typing to search for a country.";
const EMPTY_SELECTION: &str = "No countries selected yet.";

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    /// Debounced search over the remote directory.
    pub search: SearchPipeline,
    /// Persisted selection mirror.
    pub selection: SelectionStore,
    /// Details overlay state.
    pub overlay: Overlay,
    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates the state with an empty query and an empty (not yet loaded)
    /// selection.
    ///
    /// # Parameters
    ///
    /// * `directory` - Remote collaborator shared by search and selection
    /// * `debounce` - Quiet period before a query is sent
    /// * `theme` - Color scheme for UI rendering
    #[must_use]
    pub fn new(directory: Arc<dyn CountryDirectory>, debounce: Duration, theme: Theme) -> Self {
        Self {
            search: SearchPipeline::new(Arc::clone(&directory), debounce),
            selection: SelectionStore::new(directory),
            overlay: Overlay::Hidden,
            theme,
        }
    }

    /// Computes a renderable view model for a terminal of `rows` x `cols`.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::debug_span!("compute_viewmodel", rows, cols).entered();

        let search = self.search.snapshot();
        let name_width = cols.saturating_sub(ROW_DECORATION).max(8);

        let results = search.has_query().then(|| self.compute_results(&search, name_width));
        let results_rows = results.as_ref().map_or(0, |panel| {
            1 + usize::from(panel.status.is_some()) + usize::from(panel.error.is_some()) + panel.items.len() + 1
        });
        let selected_rows = rows.saturating_sub(CHROME_ROWS + results_rows);

        UIViewModel {
            header: self.compute_header(),
            search_bar: SearchBarInfo {
                query: search.query.clone(),
                placeholder: SEARCH_PLACEHOLDER,
            },
            results,
            selected: self.compute_selected(selected_rows, name_width),
            details: self.compute_details(),
            footer: self.compute_footer(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let count = self.selection.countries().len();
        HeaderInfo {
            title: format!(" Country Picker · {count} selected "),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.overlay.is_open() {
            ":close or ESC: close details  :back: return to results  :q: quit"
        } else {
            "type to search  :add N  :show N  :rm N  :clear  :q: quit"
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    /// Builds the results section.
    ///
    /// Status precedence follows the input flow: a running search shows
    /// "Loading results...", an error replaces the list, and a finished search
    /// with nothing to show reads "Searching...".
    fn compute_results(&self, search: &SearchState, name_width: usize) -> ResultsPanel {
        let status = if search.loading {
            Some("Loading results...".to_string())
        } else if search.error.is_none() && search.results.is_empty() {
            Some("Searching...".to_string())
        } else {
            None
        };

        if let Some(error) = &search.error {
            return ResultsPanel {
                status,
                error: Some(error.clone()),
                items: vec![],
            };
        }

        let matcher = SkimMatcherV2::default();
        let needle = search.query.trim();
        let active = self.overlay.active_code();

        let items = search
            .results
            .iter()
            .enumerate()
            .map(|(i, country)| ResultItem {
                number: i + 1,
                name: truncate(&country.name, name_width),
                code: country.code.clone(),
                is_selected: self.selection.contains(&country.code),
                is_active: active == Some(country.code.as_str()),
                highlight_ranges: compute_highlight_ranges(&matcher, &country.name, needle),
            })
            .collect();

        ResultsPanel {
            status,
            error: None,
            items,
        }
    }

    /// Builds the selected section, keeping the tail of the list when it does not
    /// fit in `available` rows.
    fn compute_selected(&self, available: usize, name_width: usize) -> SelectedPanel {
        let countries = self.selection.countries();
        let error = self.selection.error().map(str::to_string);
        let title = format!("Selected Countries ({})", countries.len());

        if countries.is_empty() {
            return SelectedPanel {
                title,
                error,
                empty_message: Some(EMPTY_SELECTION),
                hidden_above: 0,
                items: vec![],
            };
        }

        let mut capacity = available.saturating_sub(1 + usize::from(error.is_some()));
        if capacity < countries.len() {
            // one line goes to the "more above" marker
            capacity = capacity.saturating_sub(1);
        }
        let first = countries.len().saturating_sub(capacity);

        let items = countries
            .iter()
            .enumerate()
            .skip(first)
            .map(|(i, country)| SelectedItem {
                number: i + 1,
                name: truncate(&country.name, name_width),
                code: country.code.clone(),
            })
            .collect();

        SelectedPanel {
            title,
            error,
            empty_message: None,
            hidden_above: first,
            items,
        }
    }

    fn compute_details(&self) -> Option<DetailsCard> {
        match &self.overlay {
            Overlay::Hidden => None,
            Overlay::Details(country) => Some(details_card(country)),
        }
    }
}

/// Builds the details card, emitting rows only for attributes the country has.
#[must_use]
pub fn details_card(country: &Country) -> DetailsCard {
    let title = country.display_title().to_string();
    let subtitle = (country.name != title).then(|| country.name.clone());

    let mut rows = Vec::new();
    let mut push = |label, value: Option<String>| {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            rows.push(DetailRow { label, value });
        }
    };

    push("Capital", country.capital.clone());
    push(
        "Region",
        country.region.as_ref().map(|region| match &country.subregion {
            Some(sub) if !sub.is_empty() => format!("{region} · {sub}"),
            _ => region.clone(),
        }),
    );
    push("Population", country.population.map(format_thousands));
    push("Area", country.area.map(format_area));
    push("Languages", country.languages.as_ref().map(|l| l.join(", ")));
    push("Currencies", country.currencies.as_ref().map(|c| c.join(", ")));

    DetailsCard {
        title,
        subtitle,
        flag_url: country.flag_url.clone(),
        rows,
    }
}

/// Coalesces the matcher's character indices into `(start, end)` ranges.
fn compute_highlight_ranges(matcher: &SkimMatcherV2, text: &str, query: &str) -> Vec<(usize, usize)> {
    if query.is_empty() {
        return vec![];
    }
    let Some((_score, indices)) = matcher.fuzzy_indices(text, query) else {
        return vec![];
    };

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end += 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}
