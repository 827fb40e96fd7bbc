//! Country data providers.

use async_trait::async_trait;
use reqwest::Client;

use crate::error::SourceError;

use super::raw::{RawCountry, parse_countries};

/// Supplies the raw country list. Called once per catalog load.
#[async_trait]
pub trait CountrySource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<RawCountry>, SourceError>;

    /// Human-readable origin, for logs.
    fn describe(&self) -> String;
}

/// Fetches countries from the REST Countries HTTP API.
#[derive(Clone)]
pub struct RestCountriesSource {
    client: Client,
    url: String,
}

impl RestCountriesSource {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), url)
    }

    #[must_use]
    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl CountrySource for RestCountriesSource {
    async fn fetch_all(&self) -> Result<Vec<RawCountry>, SourceError> {
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(SourceError::HttpStatus(response.status()));
        }

        let body = response.text().await?;
        parse_countries(&body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
