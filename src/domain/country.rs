//! Country domain model.
//!
//! [`Country`] is the canonical shape shared by search results and the persisted
//! selection. Values are produced by normalizing an upstream directory record or
//! by deserializing the backend's selection list, and are never edited afterwards:
//! selecting or deselecting a country is a set-membership change, not a field edit.

use serde::{Deserialize, Serialize};

/// A country as seen by the picker.
///
/// Only `code`, `name` and `flag_url` are guaranteed. The descriptive attributes
/// are present only when the upstream record supplied them; the backend stores the
/// three required fields alone, so countries loaded from it carry `None` elsewhere.
///
/// The JSON form uses camelCase keys (`flagUrl`, `officialName`) and omits absent
/// attributes.
///
/// # Examples
///
/// ```
/// use country_picker::domain::Country;
///
/// let country: Country = serde_json::from_str(
///     r#"{"code":"NOR","name":"Norway","flagUrl":"https://flagcdn.com/w320/no.png"}"#,
/// )?;
/// assert_eq!(country.code, "NOR");
/// assert!(country.capital.is_none());
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// ISO 3166-1 alpha-3 code, unique across search results and the selection.
    pub code: String,
    /// Common display name.
    pub name: String,
    /// URL of a PNG flag image.
    pub flag_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capital: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subregion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currencies: Option<Vec<String>>,
    /// Surface area in square kilometres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
}

impl Country {
    /// Creates a country with only the required fields set.
    #[must_use]
    pub fn new(code: impl Into<String>, name: impl Into<String>, flag_url: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            flag_url: flag_url.into(),
            official_name: None,
            capital: None,
            region: None,
            subregion: None,
            population: None,
            languages: None,
            currencies: None,
            area: None,
        }
    }

    /// Name shown as the details title: the official name when known.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.official_name.as_deref().unwrap_or(&self.name)
    }
}
