use std::collections::HashMap;

use serde::Deserialize;

use crate::error::SourceError;

/// A country record as served by REST Countries v3.1.
///
/// Every field is optional on the wire; the catalog decides which records
/// are usable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCountry {
    #[serde(default)]
    pub cca3: Option<String>,
    #[serde(default)]
    pub name: RawName,
    #[serde(default)]
    pub flags: RawFlags,
    #[serde(default)]
    pub flag: Option<String>,
    #[serde(default)]
    pub translations: HashMap<String, RawName>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawName {
    #[serde(default)]
    pub common: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFlags {
    #[serde(default)]
    pub svg: Option<String>,
    #[serde(default)]
    pub png: Option<String>,
}

impl RawCountry {
    pub fn common_name(&self) -> Option<&str> {
        non_empty(self.name.common.as_deref())
    }

    /// Stable key: the ISO alpha-3 code, or the common name without one.
    pub fn id(&self) -> Option<&str> {
        non_empty(self.cca3.as_deref()).or_else(|| self.common_name())
    }

    /// SVG is preferred; PNG is accepted when that is all there is.
    pub fn flag_url(&self) -> Option<&str> {
        non_empty(self.flags.svg.as_deref()).or_else(|| non_empty(self.flags.png.as_deref()))
    }

    pub fn translation(&self, key: &str) -> Option<&str> {
        non_empty(self.translations.get(key)?.common.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Parses a REST Countries response body.
pub fn parse_countries(body: &str) -> Result<Vec<RawCountry>, SourceError> {
    Ok(serde_json::from_str(body)?)
}
