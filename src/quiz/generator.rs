use std::collections::HashSet;

use rand::Rng;
use rand::seq::index;
use tracing::debug;

use crate::data::CountryCatalog;
use crate::error::QuizError;
use crate::i18n::Language;
use crate::models::{Country, NUM_OPTIONS, Question};

/// Builds `count` questions from `catalog`.
///
/// Correct answers are drawn without replacement, so no country is asked
/// twice. Each question gets three distractors whose names in `language`
/// differ from the answer and from each other, and the four options are
/// placed in uniformly random order.
///
/// # Errors
///
/// `InsufficientData` when the catalog holds fewer than `count + 1`
/// countries, or a question cannot find three distinctly named distractors.
pub fn generate<R: Rng + ?Sized>(
    catalog: &CountryCatalog,
    count: usize,
    language: Language,
    rng: &mut R,
) -> Result<Vec<Question>, QuizError> {
    let countries = catalog.countries();
    let required = count + 1;
    if countries.len() < required {
        return Err(QuizError::InsufficientData {
            available: countries.len(),
            required,
        });
    }

    let questions = index::sample(rng, countries.len(), count)
        .into_iter()
        .map(|correct| build_question(countries, correct, language, rng))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = questions.len(), language = language.code(), "generated questions");
    Ok(questions)
}

fn build_question<R: Rng + ?Sized>(
    countries: &[Country],
    correct: usize,
    language: Language,
    rng: &mut R,
) -> Result<Question, QuizError> {
    let answer = &countries[correct];
    let mut names = HashSet::from([answer.display_name(language)]);
    let mut candidates: Vec<usize> = (0..countries.len()).filter(|&i| i != correct).collect();
    let mut distractors: Vec<&Country> = Vec::with_capacity(NUM_OPTIONS - 1);

    // Partial Fisher-Yates: draw by index removal until three names are found.
    while distractors.len() < NUM_OPTIONS - 1 && !candidates.is_empty() {
        let picked = candidates.swap_remove(rng.random_range(0..candidates.len()));
        let country = &countries[picked];
        if names.insert(country.display_name(language)) {
            distractors.push(country);
        }
    }

    if distractors.len() < NUM_OPTIONS - 1 {
        return Err(QuizError::InsufficientData {
            available: distractors.len() + 1,
            required: NUM_OPTIONS,
        });
    }

    let correct_index = rng.random_range(0..NUM_OPTIONS);
    distractors.insert(correct_index, answer);

    Ok(Question {
        options: std::array::from_fn(|i| distractors[i].clone()),
        correct_index,
    })
}
