mod country;
mod question;

pub use country::Country;
pub use question::{NUM_OPTIONS, Question};

/// Screen the terminal front-end is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Loading,
    Welcome,
    Quiz,
    Result,
    Error,
}
