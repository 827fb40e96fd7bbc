use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::error::QuizError;
use crate::i18n::Language;
use crate::models::Country;

use super::raw::RawCountry;
use super::source::CountrySource;

/// The countries eligible for a quiz in one language.
#[derive(Debug, Clone)]
pub struct CountryCatalog {
    language: Language,
    countries: Vec<Country>,
}

impl CountryCatalog {
    /// Fetches from `source` once and keeps the countries usable in
    /// `language`.
    ///
    /// # Errors
    ///
    /// `DataUnavailable` when the source fails, `InsufficientData` when
    /// fewer than `required` countries survive filtering.
    pub async fn load(
        source: &dyn CountrySource,
        language: Language,
        required: usize,
    ) -> Result<Self, QuizError> {
        info!(source = %source.describe(), language = language.code(), "loading countries");
        let records = source.fetch_all().await.map_err(|err| {
            warn!(error = %err, "country load failed");
            QuizError::from(err)
        })?;
        Self::from_raw(&records, language, required)
    }

    /// Builds a catalog from raw provider records.
    ///
    /// Records without a name in `language` or without a flag image are
    /// dropped, as are repeated ids (the first one wins).
    pub fn from_raw(
        records: &[RawCountry],
        language: Language,
        required: usize,
    ) -> Result<Self, QuizError> {
        let mut seen = HashSet::new();
        let mut countries: Vec<Country> = records
            .iter()
            .filter_map(country_from_raw)
            .filter(|country| country.name_in(language).is_some())
            .filter(|country| seen.insert(country.id.clone()))
            .collect();
        countries.sort_by(|a, b| a.id.cmp(&b.id));

        debug!(
            received = records.len(),
            kept = countries.len(),
            "filtered country records"
        );

        if countries.len() < required {
            return Err(QuizError::InsufficientData {
                available: countries.len(),
                required,
            });
        }

        info!(count = countries.len(), language = language.code(), "catalog ready");
        Ok(Self::from_countries(countries, language))
    }

    /// Wraps an already-validated country list.
    pub fn from_countries(countries: Vec<Country>, language: Language) -> Self {
        Self {
            language,
            countries,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Country> {
        self.countries.iter().find(|c| c.id == id)
    }
}

fn country_from_raw(raw: &RawCountry) -> Option<Country> {
    let mut country = Country::new(raw.id()?, raw.common_name()?, raw.flag_url()?);

    for language in [Language::English, Language::Spanish] {
        if let Some(name) = language.translation_key().and_then(|key| raw.translation(key)) {
            country = country.with_translation(language, name);
        }
    }

    if let Some(emoji) = raw.flag.as_deref().filter(|e| !e.trim().is_empty()) {
        country = country.with_flag_emoji(emoji);
    }

    Some(country)
}
