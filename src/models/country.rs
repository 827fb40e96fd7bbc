use std::collections::HashMap;

use crate::i18n::Language;

/// A country eligible for the quiz. Built by the catalog, never mutated after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub id: String,
    pub flag_url: String,
    /// Emoji flag, when the provider supplies one.
    pub flag_emoji: Option<String>,
    common_name: String,
    translations: HashMap<Language, String>,
}

impl Country {
    pub fn new(id: impl Into<String>, common_name: impl Into<String>, flag_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            flag_url: flag_url.into(),
            flag_emoji: None,
            common_name: common_name.into(),
            translations: HashMap::new(),
        }
    }

    pub fn with_translation(mut self, language: Language, name: impl Into<String>) -> Self {
        self.translations.insert(language, name.into());
        self
    }

    pub fn with_flag_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.flag_emoji = Some(emoji.into());
        self
    }

    /// Name in `language`, if this country carries one.
    pub fn name_in(&self, language: Language) -> Option<&str> {
        let name = match language.translation_key() {
            None => self.common_name.as_str(),
            Some(_) => self.translations.get(&language)?.as_str(),
        };
        let name = name.trim();
        (!name.is_empty()).then_some(name)
    }

    /// Name shown to the player. Falls back to the common name; the catalog
    /// only admits countries that resolve in its language.
    pub fn display_name(&self, language: Language) -> &str {
        self.name_in(language).unwrap_or(&self.common_name)
    }
}
