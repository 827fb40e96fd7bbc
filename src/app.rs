use std::time::Instant;

use tracing::warn;

use crate::config::QuizConfig;
use crate::data::CountryCatalog;
use crate::error::QuizError;
use crate::i18n::Language;
use crate::models::{AppState, NUM_OPTIONS, Question};
use crate::quiz::{AnswerOutcome, QuizSession, generate};

/// What the runner should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    /// Fetch a catalog for this language.
    Load(Language),
}

/// The answer just given, shown until the feedback delay runs out.
#[derive(Debug, Clone)]
pub struct Feedback {
    pub question: Question,
    pub selected_index: usize,
    pub outcome: AnswerOutcome,
    shown_at: Instant,
}

pub struct App {
    pub state: AppState,
    config: QuizConfig,
    language: Language,
    catalog: Option<CountryCatalog>,
    session: QuizSession,
    selected_option: usize,
    feedback: Option<Feedback>,
    error: Option<QuizError>,
    result_scroll: usize,
}

impl App {
    pub fn new(config: QuizConfig) -> Self {
        Self {
            state: AppState::Loading,
            language: config.language,
            session: QuizSession::new(config.total_questions),
            config,
            catalog: None,
            selected_option: 0,
            feedback: None,
            error: None,
            result_scroll: 0,
        }
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn error(&self) -> Option<&QuizError> {
        self.error.as_ref()
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    /// The flag on screen: the answered one while feedback is shown.
    pub fn current_question(&self) -> Option<&Question> {
        match &self.feedback {
            Some(feedback) => Some(&feedback.question),
            None => self.session.current_question().ok(),
        }
    }

    pub fn current_question_number(&self) -> usize {
        let answered = self.session.answers().len();
        if self.feedback.is_some() {
            answered
        } else {
            answered + 1
        }
    }

    pub fn total_questions(&self) -> usize {
        self.session.total()
    }

    /// Drops the current catalog and waits for one in `language`.
    pub fn begin_loading(&mut self, language: Language) {
        self.language = language;
        self.catalog = None;
        self.feedback = None;
        self.error = None;
        self.state = AppState::Loading;
    }

    pub fn on_catalog_loaded(&mut self, result: Result<CountryCatalog, QuizError>) {
        match result {
            Ok(catalog) if catalog.language() != self.language => {
                warn!(language = catalog.language().code(), "discarding stale catalog");
            }
            Ok(catalog) => {
                self.catalog = Some(catalog);
                self.state = AppState::Welcome;
            }
            Err(err) => self.show_error(err),
        }
    }

    /// Starts a new session over freshly generated questions.
    pub fn start_quiz(&mut self) {
        let Some(catalog) = &self.catalog else {
            return;
        };

        let questions = match generate(
            catalog,
            self.config.total_questions,
            self.language,
            &mut rand::rng(),
        ) {
            Ok(questions) => questions,
            Err(err) => return self.show_error(err),
        };

        let mut session = QuizSession::new(self.config.total_questions);
        if let Err(err) = session.start(questions) {
            return self.show_error(err);
        }

        self.session = session;
        self.selected_option = 0;
        self.feedback = None;
        self.result_scroll = 0;
        self.state = AppState::Quiz;
    }

    pub fn select_next_option(&mut self) {
        self.selected_option = (self.selected_option + 1) % NUM_OPTIONS;
    }

    pub fn select_previous_option(&mut self) {
        self.selected_option = (self.selected_option + NUM_OPTIONS - 1) % NUM_OPTIONS;
    }

    pub fn submit_answer(&mut self, now: Instant) {
        self.submit_option(self.selected_option, now);
    }

    /// Answers with option `index`. Ignored while feedback is on screen.
    pub fn submit_option(&mut self, index: usize, now: Instant) {
        if self.feedback.is_some() || index >= NUM_OPTIONS {
            return;
        }
        let Ok(question) = self.session.current_question() else {
            return;
        };
        let question = question.clone();
        let selected_id = question.options[index].id.clone();

        match self.session.submit_answer(&selected_id) {
            Ok(outcome) => {
                self.selected_option = index;
                self.feedback = Some(Feedback {
                    question,
                    selected_index: index,
                    outcome,
                    shown_at: now,
                });
            }
            Err(err) => warn!(error = %err, "answer rejected"),
        }
    }

    /// Advances past the feedback once the configured delay has elapsed.
    pub fn tick(&mut self, now: Instant) {
        let Some(feedback) = &self.feedback else {
            return;
        };
        if now.saturating_duration_since(feedback.shown_at) < self.config.feedback_delay {
            return;
        }

        self.feedback = None;
        self.selected_option = 0;
        if self.session.final_score().is_ok() {
            self.state = AppState::Result;
        } else if let Err(err) = self.session.next_question() {
            self.show_error(err);
        }
    }

    pub fn restart(&mut self) {
        self.start_quiz();
    }

    /// Switches language and returns it so the caller can reload.
    pub fn toggle_language(&mut self) -> Language {
        let language = self.language.toggled();
        self.begin_loading(language);
        language
    }

    pub fn scroll_results_down(&mut self) {
        let max_scroll = self.session.answers().len().saturating_sub(1);
        self.result_scroll = (self.result_scroll + 1).min(max_scroll);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    fn show_error(&mut self, err: QuizError) {
        warn!(error = %err, "quiz unavailable");
        self.feedback = None;
        self.error = Some(err);
        self.state = AppState::Error;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::error::SourceError;
    use crate::quiz::testing::catalog;

    fn loaded_app() -> App {
        let mut app = App::new(QuizConfig::default());
        app.on_catalog_loaded(Ok(catalog(12, Language::English)));
        app
    }

    fn correct_index(app: &App) -> usize {
        app.current_question().unwrap().correct_index
    }

    #[test]
    fn test_loaded_catalog_shows_welcome() {
        let app = loaded_app();
        assert_eq!(app.state, AppState::Welcome);
    }

    #[test]
    fn test_failed_load_shows_error() {
        let mut app = App::new(QuizConfig::default());
        app.on_catalog_loaded(Err(QuizError::DataUnavailable(SourceError::HttpStatus(
            reqwest::StatusCode::BAD_GATEWAY,
        ))));
        assert_eq!(app.state, AppState::Error);
        assert!(matches!(app.error(), Some(QuizError::DataUnavailable(_))));
        assert!(app.session().questions().is_empty());
    }

    #[test]
    fn test_stale_catalog_is_ignored() {
        let mut app = App::new(QuizConfig::default());
        app.begin_loading(Language::Spanish);
        app.on_catalog_loaded(Ok(catalog(12, Language::English)));
        assert_eq!(app.state, AppState::Loading);
    }

    #[test]
    fn test_full_round_reaches_results() {
        let mut app = loaded_app();
        app.start_quiz();
        assert_eq!(app.state, AppState::Quiz);

        let delay = app.config().feedback_delay;
        let mut now = Instant::now();
        for number in 1..=10 {
            assert_eq!(app.current_question_number(), number);
            let index = correct_index(&app);
            app.submit_option(index, now);
            assert!(app.feedback().unwrap().outcome.correct);
            now += delay;
            app.tick(now);
        }

        assert_eq!(app.state, AppState::Result);
        assert_eq!(app.session().final_score().unwrap().score, 10);
    }

    #[test]
    fn test_input_ignored_during_feedback() {
        let mut app = loaded_app();
        app.start_quiz();
        let now = Instant::now();
        let wrong = (correct_index(&app) + 1) % NUM_OPTIONS;
        app.submit_option(wrong, now);
        let answered = app.feedback().unwrap().question.correct().id.clone();

        app.submit_option(0, now);
        assert_eq!(app.session().answers().len(), 1);

        app.tick(now + Duration::from_millis(10));
        assert!(app.feedback().is_some());
        assert_eq!(app.current_question().unwrap().correct().id, answered);

        app.tick(now + app.config().feedback_delay);
        assert!(app.feedback().is_none());
        assert_eq!(app.current_question_number(), 2);
        assert_eq!(app.session().score(), 0);
    }

    #[test]
    fn test_restart_replaces_session() {
        let mut app = loaded_app();
        app.start_quiz();
        let now = Instant::now();
        let index = correct_index(&app);
        app.submit_option(index, now);

        app.restart();
        assert_eq!(app.state, AppState::Quiz);
        assert!(app.feedback().is_none());
        assert_eq!(app.session().score(), 0);
        assert!(app.session().answers().is_empty());
    }

    #[test]
    fn test_small_catalog_reports_error() {
        let mut app = App::new(QuizConfig::default());
        app.on_catalog_loaded(Ok(catalog(5, Language::English)));
        app.start_quiz();
        assert_eq!(app.state, AppState::Error);
        assert!(matches!(
            app.error(),
            Some(QuizError::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_toggle_language_requests_reload() {
        let mut app = loaded_app();
        assert_eq!(app.toggle_language(), Language::Spanish);
        assert_eq!(app.state, AppState::Loading);
        app.on_catalog_loaded(Ok(catalog(12, Language::Spanish)));
        assert_eq!(app.state, AppState::Welcome);
        assert_eq!(app.language(), Language::Spanish);
    }
}
