//! Country Picker: a terminal client for searching countries by name and
//! keeping a persisted list of selected countries.
//!
//! The application provides:
//! - Debounced, cancellable name search against a public country directory
//! - Prefix-first, accent-aware ranking of at most five results
//! - A selection list mirrored from a small REST backend, updated only after the
//!   backend confirms each change
//! - A details card for any search result
//! - File-based OpenTelemetry tracing

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal loop (main.rs)                            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Command parsing and event handling               │
//! │  - Action execution                                 │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Search        │   │ Selection     │
//! │ (ui/)         │   │ (search/)     │   │ (selection/)  │
//! │ - Rendering   │   │ - Debounce    │   │ - Backend     │
//! │ - Theming     │   │ - Cancellation│   │   mirror      │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                              │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Directory (directory/)                             │
//! │  - HTTP client, normalization, ranking              │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Paths, terminal size, cancellation tokens        │
//! │  - Country model and error types                    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`directory`]: Remote directory trait and its HTTP implementation
//! - [`domain`]: Core domain types (Country, errors)
//! - [`infrastructure`]: Paths, terminal size and cancellation
//! - [`search`]: Debounced search pipeline
//! - [`selection`]: Persisted selection store
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: OpenTelemetry tracing to a JSON-lines file
//!
//! # Configuration
//!
//! Read from the environment by the binary:
//!
//! ```text
//! COUNTRY_API_BASE_URL=http://localhost:8000/api
//! COUNTRY_SEARCH_BASE_URL=https://restcountries.com/v3.1
//! COUNTRY_SEARCH_DEBOUNCE_MS=300
//! COUNTRY_THEME=catppuccin-latte
//! COUNTRY_THEME_FILE=/path/to/theme.toml
//! COUNTRY_TRACE_LEVEL=debug
//! ```
//!
//! # Example
//!
//! ```rust
//! use country_picker::{handle_event, initialize, Config, Event};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> country_picker::Result<()> {
//! let mut state = initialize(&Config::default())?;
//!
//! let (needs_render, actions) = handle_event(&mut state, &Event::QueryChanged("peru".into()))?;
//! assert!(needs_render);
//! assert!(actions.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod directory;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod search;
pub mod selection;
pub mod ui;

pub use app::{execute, execute_all, handle_event, parse_command, Action, AppState, Event, Flow};
pub use domain::{Country, CountryError, Result};
pub use ui::Theme;

use directory::HttpDirectory;
use infrastructure::{get_data_dir, terminal_size};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Default selection backend base URL.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Default public directory base URL.
pub const DEFAULT_SEARCH_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Application configuration.
///
/// Built from a string map: the process environment in the binary, a literal
/// map in tests.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the selection backend. Default: `http://localhost:8000/api`
    pub api_base_url: String,

    /// Base URL of the name-search directory. Default: `https://restcountries.com/v3.1`
    pub search_base_url: String,

    /// Quiet period before a query is sent. Default: 300 ms
    pub debounce: Duration,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for exported spans. Default: `"info"`
    pub trace_level: String,

    /// Directory holding the trace file.
    pub data_dir: PathBuf,

    /// Terminal height in rows.
    pub rows: usize,

    /// Terminal width in columns.
    pub cols: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_map(&BTreeMap::new())
    }
}

impl Config {
    /// Parses configuration from a key/value map.
    ///
    /// # Parsing Rules
    ///
    /// - `COUNTRY_API_BASE_URL`, `COUNTRY_SEARCH_BASE_URL`: blank → default
    /// - `COUNTRY_SEARCH_DEBOUNCE_MS`: milliseconds, unparseable → 300
    /// - `COUNTRY_THEME`, `COUNTRY_THEME_FILE`: blank → unset
    /// - `COUNTRY_TRACE_LEVEL`: blank → `info`
    /// - `LINES`, `COLUMNS`: terminal size, falling back to 32×100
    /// - `XDG_DATA_HOME`, `HOME`: data directory
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use std::time::Duration;
    /// use country_picker::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("COUNTRY_SEARCH_DEBOUNCE_MS".to_string(), "150".to_string());
    /// map.insert("COUNTRY_THEME".to_string(), "catppuccin-latte".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.debounce, Duration::from_millis(150));
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            map.get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let debounce = value("COUNTRY_SEARCH_DEBOUNCE_MS")
            .and_then(|ms| ms.parse::<u64>().ok())
            .map_or(search::DEFAULT_DEBOUNCE, Duration::from_millis);
        let (rows, cols) = terminal_size(map);

        Self {
            api_base_url: value("COUNTRY_API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            search_base_url: value("COUNTRY_SEARCH_BASE_URL")
                .unwrap_or_else(|| DEFAULT_SEARCH_BASE_URL.to_string()),
            debounce,
            theme_name: value("COUNTRY_THEME"),
            theme_file: value("COUNTRY_THEME_FILE"),
            trace_level: value("COUNTRY_TRACE_LEVEL").unwrap_or_else(|| "info".to_string()),
            data_dir: get_data_dir(map),
            rows,
            cols,
        }
    }

    /// Parses configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        let map: BTreeMap<String, String> = std::env::vars().collect();
        Self::from_map(&map)
    }

    /// Resolves the theme: file first, then name, then the default.
    ///
    /// A theme that fails to load is logged and replaced by the default; it is
    /// never fatal.
    #[must_use]
    pub fn resolve_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            return Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Initializes the application state from configuration.
///
/// Builds the HTTP directory and the theme. The selection is not loaded yet;
/// the caller executes [`Action::LoadSelection`] once the runtime is up.
///
/// Must be called inside a Tokio runtime: the search pipeline spawns its
/// debounce timers on it.
///
/// # Errors
///
/// Returns [`CountryError::Config`] if the HTTP client cannot be built.
pub fn initialize(config: &Config) -> Result<AppState> {
    tracing::debug!(
        api = %config.api_base_url,
        search = %config.search_base_url,
        debounce_ms = config.debounce.as_millis(),
        "initializing country picker"
    );

    let directory = Arc::new(HttpDirectory::from_config(config)?);
    Ok(AppState::new(directory, config.debounce, config.resolve_theme()))
}
