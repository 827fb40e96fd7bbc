use tracing::{debug, info};

use crate::error::QuizError;
use crate::models::{Country, Question};

/// Rounds in one quiz.
pub const TOTAL_QUESTIONS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    InProgress,
    Finished,
}

/// Result of answering one question, for feedback rendering.
#[derive(Debug, Clone)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub correct_answer: Country,
}

/// What the player picked for one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question_index: usize,
    pub selected_id: String,
    pub correct: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalScore {
    pub score: usize,
    pub total: usize,
}

/// One run through a fixed set of questions.
///
/// Transitions are `start`, `submit_answer` and `next_question`. After an
/// answer the session waits for `next_question` before accepting another,
/// so a question can only be answered once.
#[derive(Debug, Clone)]
pub struct QuizSession {
    total: usize,
    state: SessionState,
    questions: Vec<Question>,
    current_index: usize,
    score: usize,
    awaiting_advance: bool,
    answers: Vec<AnswerRecord>,
}

impl QuizSession {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            state: SessionState::NotStarted,
            questions: Vec::new(),
            current_index: 0,
            score: 0,
            awaiting_advance: false,
            answers: Vec::new(),
        }
    }

    /// Begins a fresh run, discarding any previous progress.
    ///
    /// # Errors
    ///
    /// `InvalidQuestionSet` if `questions` does not hold exactly `total`
    /// questions. The session is left untouched in that case.
    pub fn start(&mut self, questions: Vec<Question>) -> Result<(), QuizError> {
        if questions.len() != self.total {
            return Err(QuizError::InvalidQuestionSet {
                expected: self.total,
                actual: questions.len(),
            });
        }

        self.questions = questions;
        self.current_index = 0;
        self.score = 0;
        self.awaiting_advance = false;
        self.answers = Vec::with_capacity(self.total);
        self.state = if self.total == 0 {
            SessionState::Finished
        } else {
            SessionState::InProgress
        };

        info!(total = self.total, "quiz started");
        Ok(())
    }

    pub fn current_question(&self) -> Result<&Question, QuizError> {
        if self.state != SessionState::InProgress {
            return Err(QuizError::NoActiveQuestion);
        }
        self.questions
            .get(self.current_index)
            .ok_or(QuizError::NoActiveQuestion)
    }

    /// Answers the current question with the country `selected_id`.
    ///
    /// # Errors
    ///
    /// `NoActiveQuestion` outside a running quiz, `AlreadyAnswered` if the
    /// previous answer has not been followed by `next_question`, and
    /// `UnknownOption` if `selected_id` is not among the options.
    pub fn submit_answer(&mut self, selected_id: &str) -> Result<AnswerOutcome, QuizError> {
        let question = self.current_question()?;
        if self.awaiting_advance {
            return Err(QuizError::AlreadyAnswered);
        }
        if question.option_index(selected_id).is_none() {
            return Err(QuizError::UnknownOption(selected_id.to_string()));
        }

        let correct = question.is_correct(selected_id);
        let outcome = AnswerOutcome {
            correct,
            correct_answer: question.correct().clone(),
        };

        if correct {
            self.score += 1;
        }
        self.answers.push(AnswerRecord {
            question_index: self.current_index,
            selected_id: selected_id.to_string(),
            correct,
        });
        self.current_index += 1;
        debug!(index = self.current_index, correct, score = self.score, "answer submitted");

        if self.current_index == self.total {
            self.state = SessionState::Finished;
            info!(score = self.score, total = self.total, "quiz finished");
        } else {
            self.awaiting_advance = true;
        }

        Ok(outcome)
    }

    /// Moves on to the question after an answered one and returns it.
    pub fn next_question(&mut self) -> Result<&Question, QuizError> {
        if self.state != SessionState::InProgress {
            return Err(QuizError::NoActiveQuestion);
        }
        self.awaiting_advance = false;
        self.current_question()
    }

    pub fn final_score(&self) -> Result<FinalScore, QuizError> {
        match self.state {
            SessionState::Finished => Ok(FinalScore {
                score: self.score,
                total: self.total,
            }),
            _ => Err(QuizError::NotFinished),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_awaiting_advance(&self) -> bool {
        self.awaiting_advance
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new(TOTAL_QUESTIONS)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::i18n::Language;
    use crate::quiz::generate;
    use crate::quiz::testing::catalog;

    fn questions(seed: u64) -> Vec<Question> {
        let mut rng = StdRng::seed_from_u64(seed);
        generate(&catalog(12, Language::English), TOTAL_QUESTIONS, Language::English, &mut rng)
            .unwrap()
    }

    fn wrong_id(question: &Question) -> String {
        let wrong = (question.correct_index + 1) % question.options.len();
        question.options[wrong].id.clone()
    }

    /// Answers every question, picking the correct option when `right`.
    fn play(session: &mut QuizSession, right: bool) {
        loop {
            let question = session.current_question().unwrap();
            let id = if right {
                question.correct().id.clone()
            } else {
                wrong_id(question)
            };
            let outcome = session.submit_answer(&id).unwrap();
            assert_eq!(outcome.correct, right);
            if session.state() == SessionState::Finished {
                break;
            }
            session.next_question().unwrap();
        }
    }

    #[test]
    fn test_all_correct() {
        let mut session = QuizSession::default();
        session.start(questions(1)).unwrap();
        play(&mut session, true);
        assert_eq!(
            session.final_score().unwrap(),
            FinalScore {
                score: 10,
                total: 10
            }
        );
        assert!(session.answers().iter().all(|a| a.correct));
    }

    #[test]
    fn test_all_wrong() {
        let mut session = QuizSession::default();
        session.start(questions(2)).unwrap();
        play(&mut session, false);
        assert_eq!(
            session.final_score().unwrap(),
            FinalScore { score: 0, total: 10 }
        );
        assert_eq!(session.answers().len(), 10);
    }

    #[test]
    fn test_outcome_reports_correct_answer() {
        let mut session = QuizSession::default();
        session.start(questions(3)).unwrap();
        let question = session.current_question().unwrap().clone();
        let outcome = session.submit_answer(&wrong_id(&question)).unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.correct_answer.id, question.correct().id);
        assert_eq!(session.score(), 0);
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn test_double_submit_is_rejected() {
        let mut session = QuizSession::default();
        session.start(questions(4)).unwrap();
        let id = session.current_question().unwrap().correct().id.clone();
        assert!(!session.is_awaiting_advance());
        session.submit_answer(&id).unwrap();
        assert!(session.is_awaiting_advance());

        let next_id = session.current_question().unwrap().correct().id.clone();
        assert!(matches!(
            session.submit_answer(&next_id),
            Err(QuizError::AlreadyAnswered)
        ));
        assert_eq!(session.score(), 1);

        session.next_question().unwrap();
        assert!(!session.is_awaiting_advance());
        assert!(session.submit_answer(&next_id).unwrap().correct);
    }

    #[test]
    fn test_finished_session_has_no_question() {
        let mut session = QuizSession::default();
        session.start(questions(5)).unwrap();
        play(&mut session, true);

        assert!(matches!(
            session.current_question(),
            Err(QuizError::NoActiveQuestion)
        ));
        assert!(matches!(
            session.submit_answer("ARG"),
            Err(QuizError::NoActiveQuestion)
        ));
        assert!(matches!(
            session.next_question(),
            Err(QuizError::NoActiveQuestion)
        ));
    }

    #[test]
    fn test_not_started() {
        let mut session = QuizSession::default();
        assert_eq!(session.state(), SessionState::NotStarted);
        assert!(matches!(
            session.current_question(),
            Err(QuizError::NoActiveQuestion)
        ));
        assert!(matches!(
            session.submit_answer("ARG"),
            Err(QuizError::NoActiveQuestion)
        ));
        assert!(matches!(session.final_score(), Err(QuizError::NotFinished)));
    }

    #[test]
    fn test_wrong_question_count() {
        let mut session = QuizSession::default();
        let mut short = questions(6);
        short.truncate(9);
        assert!(matches!(
            session.start(short),
            Err(QuizError::InvalidQuestionSet {
                expected: 10,
                actual: 9
            })
        ));
        assert_eq!(session.state(), SessionState::NotStarted);
    }

    #[test]
    fn test_unknown_option() {
        let mut session = QuizSession::default();
        session.start(questions(7)).unwrap();
        assert!(matches!(
            session.submit_answer("NOPE"),
            Err(QuizError::UnknownOption(_))
        ));
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_restart_resets_progress() {
        let mut session = QuizSession::default();
        session.start(questions(8)).unwrap();
        play(&mut session, true);

        session.start(questions(9)).unwrap();
        assert_eq!(session.state(), SessionState::InProgress);
        assert_eq!(session.score(), 0);
        assert_eq!(session.current_index(), 0);
        assert!(session.answers().is_empty());
        assert!(matches!(session.final_score(), Err(QuizError::NotFinished)));
    }
}
