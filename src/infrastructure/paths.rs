//! Filesystem locations and terminal geometry taken from the environment.
//!
//! Everything here reads a plain key/value map so callers can pass the process
//! environment in production and a literal map in tests.

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Directory name used under the platform data directory.
const APP_DIR_NAME: &str = "country-picker";

/// Terminal size used when `COLUMNS`/`LINES` are unset or unparseable.
pub const DEFAULT_TERMINAL_SIZE: (usize, usize) = (32, 100);

/// Returns the data directory for trace files.
///
/// Resolution order: `$XDG_DATA_HOME/country-picker`, then
/// `$HOME/.local/share/country-picker`, then the system temp directory.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use country_picker::infrastructure::get_data_dir;
///
/// let mut env = BTreeMap::new();
/// env.insert("HOME".to_string(), "/home/ana".to_string());
/// assert_eq!(
///     get_data_dir(&env).to_str().unwrap(),
///     "/home/ana/.local/share/country-picker"
/// );
/// ```
#[must_use]
pub fn get_data_dir(env: &BTreeMap<String, String>) -> PathBuf {
    if let Some(xdg) = env.get("XDG_DATA_HOME").filter(|v| !v.is_empty()) {
        return PathBuf::from(xdg).join(APP_DIR_NAME);
    }
    env.get("HOME")
        .filter(|v| !v.is_empty())
        .map_or_else(std::env::temp_dir, |home| {
            PathBuf::from(home).join(".local").join("share")
        })
        .join(APP_DIR_NAME)
}

/// Returns `(rows, cols)` from `LINES` and `COLUMNS`.
#[must_use]
pub fn terminal_size(env: &BTreeMap<String, String>) -> (usize, usize) {
    let read = |key: &str| env.get(key).and_then(|v| v.trim().parse::<usize>().ok()).filter(|v| *v > 0);
    (
        read("LINES").unwrap_or(DEFAULT_TERMINAL_SIZE.0),
        read("COLUMNS").unwrap_or(DEFAULT_TERMINAL_SIZE.1),
    )
}
