//! Route modules.

pub mod health;
pub mod sessions;
pub mod translations;

use serde::Deserialize;

use crate::i18n::Language;

/// Optional `?lang=` query parameter shared by localized endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct LanguageQuery {
    /// Requested display language.
    pub lang: Option<Language>,
}

impl LanguageQuery {
    /// The requested language, or `fallback` when none was given.
    #[must_use]
    pub fn or(&self, fallback: Language) -> Language {
        self.lang.unwrap_or(fallback)
    }
}
