//! Supported languages and the UI string table for each.

use std::fmt;

use clap::ValueEnum;

/// Language used for both UI strings and country names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum Language {
    #[default]
    #[value(name = "en")]
    English,
    #[value(name = "es")]
    Spanish,
}

impl Language {
    /// Short code used on the command line.
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Spanish => "es",
        }
    }

    /// Key into the REST Countries `translations` object, if the language
    /// is not served by `name.common`.
    pub const fn translation_key(self) -> Option<&'static str> {
        match self {
            Self::English => None,
            Self::Spanish => Some("spa"),
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::English => Self::Spanish,
            Self::Spanish => Self::English,
        }
    }

    pub fn strings(self) -> &'static Strings {
        match self {
            Self::English => &EN,
            Self::Spanish => &ES,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::English => "English",
            Self::Spanish => "Español",
        };
        f.write_str(name)
    }
}

/// Static UI text for one language.
pub struct Strings {
    pub title: &'static str,
    pub loading: &'static str,
    pub load_error: &'static str,
    pub not_enough_countries: &'static str,
    pub press_enter: &'static str,
    pub to_start: &'static str,
    pub language_label: &'static str,
    pub correct: &'static str,
    pub results: &'static str,
    pub welcome_controls: &'static str,
    pub quiz_controls: &'static str,
    pub feedback_controls: &'static str,
    pub result_controls: &'static str,
    pub error_controls: &'static str,
    progress: &'static str,
    incorrect: &'static str,
    final_score: &'static str,
    subtitle: &'static str,
}

impl Strings {
    pub fn progress(&self, number: usize, total: usize) -> String {
        fill(self.progress, &[&number.to_string(), &total.to_string()])
    }

    pub fn incorrect(&self, correct_name: &str) -> String {
        fill(self.incorrect, &[correct_name])
    }

    pub fn final_score(&self, score: usize, total: usize) -> String {
        fill(self.final_score, &[&score.to_string(), &total.to_string()])
    }

    pub fn subtitle(&self, total: usize) -> String {
        fill(self.subtitle, &[&total.to_string()])
    }
}

/// Replaces each `{}` in order with the next argument.
fn fill(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut args = args.iter();
    let mut rest = template;
    while let Some(pos) = rest.find("{}") {
        out.push_str(&rest[..pos]);
        out.push_str(args.next().copied().unwrap_or_default());
        rest = &rest[pos + 2..];
    }
    out.push_str(rest);
    out
}

static EN: Strings = Strings {
    title: "FLAG QUIZ",
    loading: "Loading countries...",
    load_error: "Failed to load the country data. Please try again later.",
    not_enough_countries: "Not enough countries to build a quiz.",
    press_enter: "ENTER",
    to_start: "to start",
    language_label: "Language",
    correct: "Correct!",
    results: "RESULTS",
    welcome_controls: "enter start  ·  l language  ·  q quit",
    quiz_controls: "j/k navigate  ·  enter select  ·  1-4 answer  ·  q quit",
    feedback_controls: "q quit",
    result_controls: "j/k scroll  ·  r play again  ·  q quit",
    error_controls: "r retry  ·  l language  ·  q quit",
    progress: "Question {} of {}",
    incorrect: "Incorrect. The answer was {}.",
    final_score: "You got {} of {} right",
    subtitle: "{} flags · 4 options each",
};

static ES: Strings = Strings {
    title: "QUIZ DE BANDERAS",
    loading: "Cargando países...",
    load_error: "Error al cargar los datos. Inténtalo de nuevo más tarde.",
    not_enough_countries: "No hay suficientes países para crear el quiz.",
    press_enter: "ENTER",
    to_start: "para empezar",
    language_label: "Idioma",
    correct: "¡Correcto!",
    results: "RESULTADOS",
    welcome_controls: "enter empezar  ·  l idioma  ·  q salir",
    quiz_controls: "j/k navegar  ·  enter elegir  ·  1-4 responder  ·  q salir",
    feedback_controls: "q salir",
    result_controls: "j/k desplazar  ·  r jugar de nuevo  ·  q salir",
    error_controls: "r reintentar  ·  l idioma  ·  q salir",
    progress: "Intento {} de {}",
    incorrect: "Incorrecto. La respuesta era {}.",
    final_score: "Has acertado {} de {}",
    subtitle: "{} banderas · 4 opciones cada una",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_per_language() {
        assert_eq!(Language::English.strings().progress(3, 10), "Question 3 of 10");
        assert_eq!(Language::Spanish.strings().progress(3, 10), "Intento 3 de 10");
    }

    #[test]
    fn test_feedback_and_summary_text() {
        assert_eq!(
            Language::Spanish.strings().incorrect("Perú"),
            "Incorrecto. La respuesta era Perú."
        );
        assert_eq!(
            Language::Spanish.strings().final_score(7, 10),
            "Has acertado 7 de 10"
        );
        assert_eq!(
            Language::English.strings().final_score(0, 10),
            "You got 0 of 10 right"
        );
    }

    #[test]
    fn test_toggle_and_codes() {
        assert_eq!(Language::English.toggled(), Language::Spanish);
        assert_eq!(Language::Spanish.toggled(), Language::English);
        assert_eq!(Language::Spanish.translation_key(), Some("spa"));
        assert_eq!(Language::English.translation_key(), None);
        assert_eq!(Language::from_str("es", true), Ok(Language::Spanish));
    }
}
