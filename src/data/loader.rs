use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::SourceError;

use super::raw::{RawCountry, parse_countries};
use super::source::CountrySource;

/// Reads a saved REST Countries response from disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl CountrySource for JsonFileSource {
    async fn fetch_all(&self) -> Result<Vec<RawCountry>, SourceError> {
        let json_content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.clone(),
                source,
            })?;

        parse_countries(&json_content)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/countries.json")
    }

    #[tokio::test]
    async fn test_reads_fixture() {
        let countries = JsonFileSource::new(fixture()).fetch_all().await.unwrap();
        assert!(countries.len() >= 11);
        assert!(countries.iter().any(|c| c.id() == Some("FRA")));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let source = JsonFileSource::new("does/not/exist.json");
        assert!(matches!(
            source.fetch_all().await,
            Err(SourceError::Io { .. })
        ));
    }
}
