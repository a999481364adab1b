//! Upstream directory record models and their normalization.
//!
//! The name-search endpoint returns loosely structured records. These types keep
//! every field optional so one malformed record never fails the whole response;
//! [`normalize_records`] then drops incomplete records and maps the rest into the
//! canonical [`Country`].

use crate::domain::Country;
use indexmap::IndexMap;
use serde::Deserialize;

/// A country record as returned by the name-search endpoint.
///
/// Language and currency maps are kept in the order the server sent them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCountry {
    pub cca3: Option<String>,
    pub name: Option<RawName>,
    pub flags: Option<RawFlags>,
    pub capital: Option<Vec<String>>,
    pub region: Option<String>,
    pub subregion: Option<String>,
    pub population: Option<u64>,
    pub languages: Option<IndexMap<String, String>>,
    pub currencies: Option<IndexMap<String, RawCurrency>>,
    pub area: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawName {
    pub common: Option<String>,
    pub official: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFlags {
    pub png: Option<String>,
    pub svg: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCurrency {
    pub name: Option<String>,
    pub symbol: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl RawCountry {
    /// Maps the record into a [`Country`].
    ///
    /// Returns `None` when the common name, the PNG flag or the alpha-3 code is
    /// missing or empty.
    #[must_use]
    pub fn into_country(self) -> Option<Country> {
        let (common, official) = self
            .name
            .map_or((None, None), |name| (name.common, name.official));
        let name = non_empty(common)?;
        let flag_url = non_empty(self.flags.and_then(|flags| flags.png))?;
        let code = non_empty(self.cca3)?;

        Some(Country {
            code,
            name,
            flag_url,
            official_name: official,
            capital: self.capital.and_then(|capitals| capitals.into_iter().next()),
            region: self.region,
            subregion: self.subregion,
            population: self.population,
            languages: self.languages.map(|map| map.into_values().collect()),
            currencies: self
                .currencies
                .map(|map| map.into_values().filter_map(|currency| non_empty(currency.name)).collect()),
            area: self.area,
        })
    }
}

/// Normalizes a batch of upstream records, dropping incomplete ones.
#[must_use]
pub fn normalize_records(records: Vec<RawCountry>) -> Vec<Country> {
    let total = records.len();
    let countries: Vec<Country> = records.into_iter().filter_map(RawCountry::into_country).collect();
    tracing::debug!(
        total,
        kept = countries.len(),
        dropped = total - countries.len(),
        "normalized directory records"
    );
    countries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Vec<RawCountry> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn drops_records_missing_name_flag_or_code() {
        let records = parse(
            r#"[
                {"cca3": "DEU", "name": {"common": "Germany"}, "flags": {"png": "de.png"}},
                {"cca3": "XXA", "flags": {"png": "xa.png"}},
                {"cca3": "XXB", "name": {"common": "No Flag"}},
                {"name": {"common": "No Code"}, "flags": {"png": "nc.png"}},
                {"cca3": "", "name": {"common": "Empty Code"}, "flags": {"png": "ec.png"}},
                {"cca3": "XXC", "name": {"common": "Svg Only"}, "flags": {"svg": "x.svg"}}
            ]"#,
        );

        let countries = normalize_records(records);
        let codes: Vec<&str> = countries.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["DEU"]);
    }

    #[test]
    fn maps_full_record() {
        let records = parse(
            r#"[{
                "cca3": "ZAF",
                "name": {"common": "South Africa", "official": "Republic of South Africa"},
                "flags": {"png": "za.png", "svg": "za.svg"},
                "capital": ["Pretoria", "Bloemfontein", "Cape Town"],
                "region": "Africa",
                "subregion": "Southern Africa",
                "population": 59308690,
                "languages": {"afr": "Afrikaans", "eng": "English", "zul": "Zulu"},
                "currencies": {"ZAR": {"name": "South African rand", "symbol": "R"}},
                "area": 1221037.0
            }]"#,
        );

        let country = normalize_records(records).remove(0);
        assert_eq!(country.code, "ZAF");
        assert_eq!(country.official_name.as_deref(), Some("Republic of South Africa"));
        assert_eq!(country.capital.as_deref(), Some("Pretoria"));
        assert_eq!(country.population, Some(59_308_690));
        assert_eq!(
            country.languages,
            Some(vec!["Afrikaans".to_string(), "English".to_string(), "Zulu".to_string()])
        );
        assert_eq!(country.currencies, Some(vec!["South African rand".to_string()]));
        assert_eq!(country.area, Some(1_221_037.0));
    }

    #[test]
    fn language_order_follows_remote_order() {
        let records = parse(
            r#"[{"cca3": "CHE", "name": {"common": "Switzerland"}, "flags": {"png": "ch.png"},
                 "languages": {"roh": "Romansh", "fra": "French", "gsw": "Swiss German", "ita": "Italian"}}]"#,
        );

        let country = normalize_records(records).remove(0);
        assert_eq!(
            country.languages.unwrap(),
            vec!["Romansh", "French", "Swiss German", "Italian"]
        );
    }

    #[test]
    fn nameless_currency_only_loses_that_entry() {
        let records = parse(
            r#"[
                {"cca3": "DEU", "name": {"common": "Germany"}, "flags": {"png": "de.png"},
                 "currencies": {"EUR": {"name": "Euro", "symbol": "€"}}},
                {"cca3": "XXA", "name": {"common": "Oddland"}, "flags": {"png": "xa.png"},
                 "currencies": {"XXX": {"symbol": "?"}, "XXB": {"name": "Odd bucks"}}}
            ]"#,
        );

        let countries = normalize_records(records);
        assert_eq!(countries.len(), 2);
        assert_eq!(countries[0].currencies, Some(vec!["Euro".to_string()]));
        assert_eq!(countries[1].currencies, Some(vec!["Odd bucks".to_string()]));
    }

    #[test]
    fn absent_attributes_stay_none() {
        let records = parse(r#"[{"cca3": "ATA", "name": {"common": "Antarctica"}, "flags": {"png": "aq.png"}, "capital": []}]"#);

        let country = normalize_records(records).remove(0);
        assert_eq!(country, Country::new("ATA", "Antarctica", "aq.png"));
    }
}
