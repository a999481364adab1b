//! Search result ranking.
//!
//! Results are ordered by two keys:
//!
//! 1. whether the lowercase name starts with the lowercase trimmed query
//!    (prefix matches first);
//! 2. a locale-aware, case-insensitive comparison of the names.
//!
//! The locale-aware comparison folds each name to a collation key: Unicode NFD
//! decomposition with combining marks removed, then lowercased. "Åland Islands"
//! therefore sorts with the A's instead of after "Zimbabwe". Names whose keys tie
//! fall back to the plain lowercase comparison so the order is total.

use crate::domain::Country;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Maximum number of results a search returns.
pub const MAX_RESULTS: usize = 5;

/// Folds a name into its collation key.
#[must_use]
pub fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Sorts countries by prefix match then name, and keeps the first [`MAX_RESULTS`].
///
/// # Examples
///
/// ```
/// use country_picker::directory::rank_results;
/// use country_picker::domain::Country;
///
/// let countries = vec![
///     Country::new("XDL", "Disunited Land", "x.png"),
///     Country::new("USA", "United States", "us.png"),
///     Country::new("GBR", "United Kingdom", "gb.png"),
/// ];
/// let ranked = rank_results(countries, " United ");
/// let names: Vec<&str> = ranked.iter().map(|c| c.name.as_str()).collect();
/// assert_eq!(names, ["United Kingdom", "United States", "Disunited Land"]);
/// ```
#[must_use]
pub fn rank_results(countries: Vec<Country>, query: &str) -> Vec<Country> {
    let needle = query.trim().to_lowercase();

    let mut keyed: Vec<(bool, String, Country)> = countries
        .into_iter()
        .map(|country| {
            let lower = country.name.to_lowercase();
            (!lower.starts_with(&needle), collation_key(&country.name), country)
        })
        .collect();

    keyed.sort_by(|(a_miss, a_key, a), (b_miss, b_key, b)| {
        a_miss
            .cmp(b_miss)
            .then_with(|| a_key.cmp(b_key))
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });

    keyed
        .into_iter()
        .take(MAX_RESULTS)
        .map(|(_, _, country)| country)
        .collect()
}
