//! Theme management and ANSI escape sequence generation.
//!
//! Colors are hex strings rendered as 24-bit ANSI sequences. Two built-in themes
//! ship with the binary; custom themes are TOML files with the same shape.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: dark (default)
//! - `catppuccin-latte`: light
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#cba6f7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#cba6f7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! status_fg = "#89b4fa"
//! error_fg = "#f38ba8"
//! add_badge_fg = "#a6e3a1"
//! selected_badge_fg = "#9399b2"
//! remove_badge_fg = "#f38ba8"
//! overlay_border = "#f5c2e7"
//! ```
//!
//! `header_bg` and `overlay_bg` are optional.

use crate::domain::{CountryError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Control sequence introducer.
const CSI: &str = "\u{1b}[";

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "catppuccin-mocha";

/// A named color palette.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors keyed by the element they paint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Foreground of the row whose details are open.
    pub selection_fg: String,
    /// Background of the row whose details are open.
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer, section titles and secondary info.
    pub text_dim: String,

    /// Separator lines.
    pub border: String,
    pub search_bar_border: String,

    /// Query match highlight foreground.
    pub match_highlight_fg: String,
    /// Query match highlight background.
    pub match_highlight_bg: String,

    /// "Loading results..." and empty-list messages.
    pub status_fg: String,
    /// Search and selection error messages.
    pub error_fg: String,

    /// The `+` badge on unselected results.
    pub add_badge_fg: String,
    /// The `selected` badge on already-selected results.
    pub selected_badge_fg: String,
    /// The `x` badge on selected-list rows.
    pub remove_badge_fg: String,

    /// Details card frame.
    pub overlay_border: String,
    /// Details card fill.
    #[serde(default)]
    pub overlay_bg: Option<String>,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized
    /// - `None` if the theme name is unknown
    ///
    /// # Example
    ///
    /// ```rust
    /// use country_picker::ui::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte").unwrap();
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Parameters
    ///
    /// * `path` - Path to the TOML file
    ///
    /// # Errors
    ///
    /// Returns [`CountryError::Theme`] if the file cannot be read or its TOML
    /// content does not describe a theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| CountryError::Theme(format!("Failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| CountryError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Parses `#rrggbb` (the `#` is optional). Anything else renders as white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');
        let rgb = if hex.len() == 6 {
            u32::from_str_radix(hex, 16).unwrap_or(0x00ff_ffff)
        } else {
            0x00ff_ffff
        };
        let [_, r, g, b] = rgb.to_be_bytes();
        (r, g, b)
    }

    /// Truecolor foreground escape (`ESC[38;2;r;g;bm`) for a hex color.
    ///
    /// ```rust
    /// use country_picker::ui::Theme;
    ///
    /// assert_eq!(Theme::fg("#cdd6f4"), "\u{1b}[38;2;205;214;244m");
    /// assert_eq!(Theme::fg("not a color"), "\u{1b}[38;2;255;255;255m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("{CSI}38;2;{r};{g};{b}m")
    }

    /// Truecolor background escape (`ESC[48;2;r;g;bm`).
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("{CSI}48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{1b}[1m"
    }

    /// Clears every attribute set by the other helpers.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{1b}[0m"
    }
}

impl Default for Theme {
    /// Returns the `catppuccin-mocha` theme, or a plain palette if the built-in
    /// file fails to parse.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).unwrap_or_else(Self::plain)
    }
}

impl Theme {
    fn plain() -> Self {
        let white = || "#ffffff".to_string();
        let grey = || "#808080".to_string();
        Self {
            name: "plain".to_string(),
            colors: ThemeColors {
                header_fg: white(),
                header_bg: None,
                selection_fg: "#000000".to_string(),
                selection_bg: white(),
                text_normal: white(),
                text_dim: grey(),
                border: grey(),
                search_bar_border: white(),
                match_highlight_fg: "#000000".to_string(),
                match_highlight_bg: "#ffff00".to_string(),
                status_fg: white(),
                error_fg: "#ff0000".to_string(),
                add_badge_fg: "#00ff00".to_string(),
                selected_badge_fg: grey(),
                remove_badge_fg: "#ff0000".to_string(),
                overlay_border: white(),
                overlay_bg: None,
            },
        }
    }
}
