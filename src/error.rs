//! Error types shared by the catalog, generator and session.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by a country data provider.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    #[error("country request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("country request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("malformed country data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors surfaced by the quiz core to the presenter.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    /// The data provider was unreachable or returned malformed data.
    #[error("country data unavailable: {0}")]
    DataUnavailable(#[from] SourceError),
    /// The catalog holds too few countries for the requested quiz.
    #[error("not enough countries: {available} available, {required} required")]
    InsufficientData { available: usize, required: usize },
    #[error("expected {expected} questions, got {actual}")]
    InvalidQuestionSet { expected: usize, actual: usize },
    #[error("no question is active")]
    NoActiveQuestion,
    #[error("current question was already answered")]
    AlreadyAnswered,
    #[error("quiz is not finished yet")]
    NotFinished,
    #[error("'{0}' is not one of the current options")]
    UnknownOption(String),
}
