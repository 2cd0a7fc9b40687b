//! Word-list languages

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Language of the active word list
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Language {
    /// Primary language, selected when nothing else is configured
    #[default]
    Russian,
    English,
}

impl Language {
    /// All languages in menu order
    pub fn all() -> &'static [Language] {
        &[Language::Russian, Language::English]
    }

    /// Short code used in configuration and word-list file names
    pub fn code(&self) -> &'static str {
        match self {
            Language::Russian => "ru",
            Language::English => "en",
        }
    }

    /// Display label for the language
    pub fn label(&self) -> &'static str {
        match self {
            Language::Russian => "Русский",
            Language::English => "English",
        }
    }

    /// The other language
    pub fn toggle(&self) -> Language {
        match self {
            Language::Russian => Language::English,
            Language::English => Language::Russian,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        Language::all()
            .iter()
            .copied()
            .find(|lang| lang.code() == code)
            .ok_or_else(|| Error::UnknownLanguage(s.to_string()))
    }
}
