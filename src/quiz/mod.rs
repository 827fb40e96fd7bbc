//! Quiz core: question generation and the session state machine.

mod generator;
mod session;

pub use generator::generate;
pub use session::{AnswerOutcome, AnswerRecord, FinalScore, QuizSession, SessionState, TOTAL_QUESTIONS};
