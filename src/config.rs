use std::env;
use std::time::Duration;

use crate::i18n::Language;
use crate::quiz::TOTAL_QUESTIONS;

pub const DEFAULT_API_URL: &str =
    "https://restcountries.com/v3.1/all?fields=name,flags,flag,cca3,translations";

/// Pause between answering and the next flag.
pub const DEFAULT_FEEDBACK_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone)]
pub struct QuizConfig {
    pub total_questions: usize,
    pub api_url: String,
    pub feedback_delay: Duration,
    pub language: Language,
}

impl QuizConfig {
    /// Defaults, with the API URL overridable through `FLAG_QUIZ_API_URL`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns; blank values are
    /// ignored.
    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(url) = lookup("FLAG_QUIZ_API_URL").filter(|url| !url.trim().is_empty()) {
            config.api_url = url;
        }
        config
    }

    /// Countries a catalog needs before a quiz can be generated from it.
    pub fn required_countries(&self) -> usize {
        self.total_questions + 1
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            total_questions: TOTAL_QUESTIONS,
            api_url: DEFAULT_API_URL.to_string(),
            feedback_delay: DEFAULT_FEEDBACK_DELAY,
            language: Language::default(),
        }
    }
}
