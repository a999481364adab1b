//! HTTP implementation of [`CountryDirectory`].
//!
//! Talks to two services with one `reqwest::Client`:
//!
//! - the public name-search endpoint, `{search_base}/name/{query}`
//! - the selection backend, `{api_base}/selected-countries/`
//!
//! Every non-success status, transport failure or undecodable body becomes a
//! [`CountryError::Network`] tagged with the failing [`Operation`].

use super::backend::CountryDirectory;
use super::models::{normalize_records, RawCountry};
use super::ranking::rank_results;
use crate::domain::{Country, CountryError, Operation, Result};
use crate::infrastructure::CancellationToken;
use crate::Config;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::Instrument;

/// Directory client backed by HTTP.
#[derive(Debug, Clone)]
pub struct HttpDirectory {
    client: reqwest::Client,
    api_base_url: String,
    search_base_url: String,
}

impl HttpDirectory {
    /// Creates a client for the given backend and search base URLs.
    ///
    /// Trailing slashes on either base are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CountryError::Config`] if the HTTP client cannot be built.
    pub fn new(api_base_url: impl Into<String>, search_base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("country-picker/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CountryError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
            search_base_url: search_base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Creates a client from the configured base URLs.
    ///
    /// # Errors
    ///
    /// Returns [`CountryError::Config`] if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.api_base_url.clone(), config.search_base_url.clone())
    }

    fn selected_url(&self) -> String {
        format!("{}/selected-countries/", self.api_base_url)
    }

    fn selected_item_url(&self, code: &str) -> String {
        format!("{}/selected-countries/{}/", self.api_base_url, urlencoding::encode(code))
    }

    fn search_url(&self, query: &str) -> String {
        format!("{}/name/{}", self.search_base_url, urlencoding::encode(query))
    }

    /// Sends a request and checks the status.
    async fn send(operation: Operation, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let response = request
            .send()
            .await
            .map_err(|e| CountryError::network(operation, None, e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            tracing::debug!(%operation, status = status.as_u16(), "remote call rejected");
            Err(CountryError::network(
                operation,
                Some(status.as_u16()),
                status.canonical_reason().unwrap_or("unexpected status"),
            ))
        }
    }

    /// Sends a request and decodes a JSON body.
    async fn send_json<T: DeserializeOwned>(operation: Operation, request: reqwest::RequestBuilder) -> Result<T> {
        Self::send(operation, request)
            .await?
            .json::<T>()
            .await
            .map_err(|e| CountryError::network(operation, None, format!("invalid response body: {e}")))
    }

    async fn fetch_search(&self, query: &str) -> Result<Vec<Country>> {
        let records: Vec<RawCountry> =
            Self::send_json(Operation::Search, self.client.get(self.search_url(query))).await?;
        Ok(rank_results(normalize_records(records), query))
    }
}

#[async_trait]
impl CountryDirectory for HttpDirectory {
    async fn search_by_name(&self, query: &str, cancel: &CancellationToken) -> Result<Vec<Country>> {
        if cancel.is_cancelled() {
            return Err(CountryError::Cancelled);
        }

        let span = tracing::debug_span!("http_search_by_name", query = %query);
        async {
            tokio::select! {
                biased;
                () = cancel.cancelled() => {
                    tracing::debug!("search request cancelled");
                    Err(CountryError::Cancelled)
                }
                result = self.fetch_search(query) => {
                    if let Ok(countries) = &result {
                        tracing::debug!(count = countries.len(), "search completed");
                    }
                    result
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn fetch_selected(&self) -> Result<Vec<Country>> {
        tracing::debug!(url = %self.selected_url(), "fetching selected countries");
        Self::send_json(Operation::LoadSelected, self.client.get(self.selected_url())).await
    }

    async fn persist_selected(&self, country: &Country) -> Result<Country> {
        tracing::debug!(code = %country.code, "persisting selected country");
        Self::send_json(
            Operation::SaveSelected,
            self.client.post(self.selected_url()).json(country),
        )
        .await
    }

    async fn delete_selected(&self, country: &Country) -> Result<()> {
        tracing::debug!(code = %country.code, "deleting selected country");
        Self::send(
            Operation::RemoveSelected,
            self.client.delete(self.selected_item_url(&country.code)),
        )
        .await
        .map(drop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_trim_trailing_slashes_and_encode() {
        let directory = HttpDirectory::new("http://localhost:8000/api/", "https://restcountries.com/v3.1/").unwrap();

        assert_eq!(directory.selected_url(), "http://localhost:8000/api/selected-countries/");
        assert_eq!(
            directory.selected_item_url("CIV"),
            "http://localhost:8000/api/selected-countries/CIV/"
        );
        assert_eq!(
            directory.search_url("São Tomé & P"),
            "https://restcountries.com/v3.1/name/S%C3%A3o%20Tom%C3%A9%20%26%20P"
        );
    }

    #[tokio::test]
    async fn cancelled_token_short_circuits_search() {
        let directory = HttpDirectory::new("http://127.0.0.1:9", "http://127.0.0.1:9").unwrap();
        let token = CancellationToken::new();
        token.cancel();

        let err = directory.search_by_name("peru", &token).await.unwrap_err();
        assert!(err.is_cancelled());
    }
}
