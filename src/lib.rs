//! # flag-quiz
//!
//! A terminal flag quiz: ten flags, four country names each, in English or
//! Spanish. Country data comes from the REST Countries API or a saved copy
//! of its response.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use flag_quiz::{AppError, FlagQuiz, QuizConfig, RestCountriesSource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = QuizConfig::from_env();
//!     let source = Arc::new(RestCountriesSource::new(config.api_url.clone()));
//!     FlagQuiz::new(config, source).run().await
//! }
//! ```
//!
//! The quiz core ([`CountryCatalog`], [`generate`], [`QuizSession`]) has no
//! terminal dependency and can drive any other front-end.

mod app;
pub mod config;
mod data;
mod error;
pub mod i18n;
mod models;
mod quiz;
pub mod terminal;
mod ui;

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::info;

pub use app::{Action, App, Feedback};
pub use config::QuizConfig;
pub use data::{
    CountryCatalog, CountrySource, JsonFileSource, RawCountry, RestCountriesSource, parse_countries,
};
pub use error::{QuizError, SourceError};
pub use i18n::Language;
pub use models::{AppState, Country, NUM_OPTIONS, Question};
pub use quiz::{
    AnswerOutcome, AnswerRecord, FinalScore, QuizSession, SessionState, TOTAL_QUESTIONS, generate,
};

const TICK_RATE: Duration = Duration::from_millis(50);

/// Error type for running the quiz.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}

type LoadResult = Result<CountryCatalog, QuizError>;

/// A quiz bound to a country source, ready to run in the terminal.
pub struct FlagQuiz {
    app: App,
    source: Arc<dyn CountrySource>,
}

impl FlagQuiz {
    pub fn new(config: QuizConfig, source: Arc<dyn CountrySource>) -> Self {
        Self {
            app: App::new(config),
            source,
        }
    }

    /// Run the quiz in the terminal.
    ///
    /// Takes over the terminal, loads the catalog in the background and
    /// returns when the user quits.
    pub async fn run(mut self) -> Result<(), AppError> {
        let mut term = terminal::init()?;
        let result = self.event_loop(&mut term).await;
        terminal::restore()?;
        result
    }

    async fn event_loop(&mut self, terminal: &mut terminal::QuizTerminal) -> Result<(), AppError> {
        let (tx, mut rx) = mpsc::unbounded_channel::<LoadResult>();
        self.spawn_load(self.app.language(), &tx);

        loop {
            while let Ok(loaded) = rx.try_recv() {
                self.app.on_catalog_loaded(loaded);
            }
            self.app.tick(Instant::now());

            terminal.draw(|frame| ui::render(frame, &self.app))?;

            if !event::poll(TICK_RATE)? {
                tokio::task::yield_now().await;
                continue;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match handle_input(&mut self.app, key.code) {
                    Action::Quit => break,
                    Action::Load(language) => self.spawn_load(language, &tx),
                    Action::None => {}
                }
            }
        }

        info!("quiz closed");
        Ok(())
    }

    /// Loads a catalog once in the background. Failures are reported, never
    /// retried here.
    fn spawn_load(&mut self, language: Language, tx: &mpsc::UnboundedSender<LoadResult>) {
        self.app.begin_loading(language);
        let source = Arc::clone(&self.source);
        let required = self.app.config().required_countries();
        let tx = tx.clone();

        tokio::spawn(async move {
            let result = CountryCatalog::load(source.as_ref(), language, required).await;
            let _ = tx.send(result);
        });
    }
}

/// Maps a key press to a state change.
pub fn handle_input(app: &mut App, key: KeyCode) -> Action {
    if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) {
        return Action::Quit;
    }

    match app.state {
        AppState::Loading => Action::None,
        AppState::Welcome => handle_welcome_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::Result => handle_result_input(app, key),
        AppState::Error => handle_error_input(app, key),
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> Action {
    match key {
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.start_quiz();
            Action::None
        }
        KeyCode::Char('l') | KeyCode::Char('L') => Action::Load(app.toggle_language()),
        _ => Action::None,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> Action {
    if app.feedback().is_some() {
        return Action::None;
    }

    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Enter | KeyCode::Char(' ') => app.submit_answer(Instant::now()),
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            app.submit_option(index, Instant::now());
        }
        _ => {}
    }
    Action::None
}

fn handle_result_input(app: &mut App, key: KeyCode) -> Action {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart(),
        _ => {}
    }
    Action::None
}

fn handle_error_input(app: &mut App, key: KeyCode) -> Action {
    match key {
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => Action::Load(app.language()),
        KeyCode::Char('l') | KeyCode::Char('L') => Action::Load(app.toggle_language()),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::testing::catalog;

    fn welcome_app() -> App {
        let mut app = App::new(QuizConfig::default());
        app.on_catalog_loaded(Ok(catalog(12, Language::English)));
        app
    }

    #[test]
    fn test_quit_from_any_screen() {
        let mut app = App::new(QuizConfig::default());
        assert_eq!(handle_input(&mut app, KeyCode::Char('q')), Action::Quit);
        let mut app = welcome_app();
        assert_eq!(handle_input(&mut app, KeyCode::Esc), Action::Quit);
    }

    #[test]
    fn test_loading_ignores_input() {
        let mut app = App::new(QuizConfig::default());
        assert_eq!(handle_input(&mut app, KeyCode::Enter), Action::None);
        assert_eq!(app.state, AppState::Loading);
    }

    #[test]
    fn test_language_key_requests_reload() {
        let mut app = welcome_app();
        assert_eq!(
            handle_input(&mut app, KeyCode::Char('l')),
            Action::Load(Language::Spanish)
        );
        assert_eq!(app.state, AppState::Loading);
    }

    #[test]
    fn test_number_keys_answer() {
        let mut app = welcome_app();
        handle_input(&mut app, KeyCode::Enter);
        assert_eq!(app.state, AppState::Quiz);

        handle_input(&mut app, KeyCode::Char('3'));
        let feedback = app.feedback().unwrap();
        assert_eq!(feedback.selected_index, 2);

        handle_input(&mut app, KeyCode::Char('j'));
        assert_eq!(app.selected_option(), 2);
        assert_eq!(app.session().answers().len(), 1);
    }

    #[test]
    fn test_error_screen_retries() {
        let mut app = App::new(QuizConfig::default());
        app.on_catalog_loaded(Err(QuizError::InsufficientData {
            available: 3,
            required: 11,
        }));
        assert_eq!(
            handle_input(&mut app, KeyCode::Char('r')),
            Action::Load(Language::English)
        );
    }

    #[test]
    fn test_error_screen_switches_language() {
        let mut app = App::new(QuizConfig::default());
        app.begin_loading(Language::Spanish);
        app.on_catalog_loaded(Err(QuizError::DataUnavailable(SourceError::HttpStatus(
            reqwest::StatusCode::SERVICE_UNAVAILABLE,
        ))));
        assert_eq!(app.state, AppState::Error);

        assert_eq!(
            handle_input(&mut app, KeyCode::Char('l')),
            Action::Load(Language::English)
        );
        assert_eq!(app.language(), Language::English);
        assert_eq!(app.state, AppState::Loading);
        assert!(app.error().is_none());
    }
}
