//! Word lists per language
//!
//! Embeds the bundled word lists at build time and optionally replaces them
//! with plain-text lists from a directory (`ru.txt`, `en.txt`).

use once_cell::sync::Lazy;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::Path;

use super::language::Language;
use crate::config::GameConfig;
use crate::error::{Error, Result};

/// Bundled word lists, one word per line
static EN_DATA: &str = include_str!("../../data/en.txt");
static RU_DATA: &str = include_str!("../../data/ru.txt");

static EN_WORDS: Lazy<BTreeSet<String>> = Lazy::new(|| parse_word_list(EN_DATA));
static RU_WORDS: Lazy<BTreeSet<String>> = Lazy::new(|| parse_word_list(RU_DATA));

static NO_WORDS: BTreeSet<String> = BTreeSet::new();

/// Parse a word list: one word per line, `#` comments and blank lines skipped,
/// words trimmed and lowercased.
pub fn parse_word_list(text: &str) -> BTreeSet<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}

/// Candidate words for every language, fixed for the engine's lifetime
#[derive(Debug, Clone, Default)]
pub struct WordCorpus {
    words: BTreeMap<Language, BTreeSet<String>>,
}

impl WordCorpus {
    /// Corpus with no words for any language
    pub fn new() -> Self {
        Self::default()
    }

    /// Corpus built from the bundled word lists
    pub fn embedded() -> Self {
        Self::new()
            .with_words(Language::Russian, RU_WORDS.iter().cloned())
            .with_words(Language::English, EN_WORDS.iter().cloned())
    }

    /// Replace the words for one language. Words are lowercased.
    pub fn with_words<I, S>(mut self, language: Language, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        self.words.insert(language, words);
        self
    }

    /// Bundled lists, overridden by `<dir>/<code>.txt` for each language whose file exists
    pub fn load_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(Error::NotADirectory(dir.to_path_buf()));
        }

        let mut corpus = Self::embedded();
        for &language in Language::all() {
            let path = dir.join(format!("{}.txt", language.code()));
            match fs::read_to_string(&path) {
                Ok(text) => {
                    let words = parse_word_list(&text);
                    tracing::info!(
                        "Loaded {} {} words from {}",
                        words.len(),
                        language.code(),
                        path.display()
                    );
                    corpus.words.insert(language, words);
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    tracing::warn!(
                        "No word list at {}, using bundled {} words",
                        path.display(),
                        language.code()
                    );
                }
                Err(source) => return Err(Error::WordList { path, source }),
            }
        }
        Ok(corpus)
    }

    /// Corpus for a configuration: the directory override if set, bundled lists otherwise
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        match &config.words_dir {
            Some(dir) => Self::load_dir(dir),
            None => Ok(Self::embedded()),
        }
    }

    /// Words for a language (empty if none were supplied)
    pub fn words(&self, language: Language) -> &BTreeSet<String> {
        self.words.get(&language).unwrap_or(&NO_WORDS)
    }

    /// Number of words for a language
    pub fn len(&self, language: Language) -> usize {
        self.words(language).len()
    }

    /// Whether a language has no words
    pub fn is_empty(&self, language: Language) -> bool {
        self.words(language).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("unscramble-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_parse_word_list() {
        let words = parse_word_list("# header\nApple\n\n  lemon  \nAPPLE\n");
        assert_eq!(words.len(), 2);
        assert!(words.contains("apple"));
        assert!(words.contains("lemon"));
    }

    #[test]
    fn test_embedded_lists_are_populated() {
        let corpus = WordCorpus::embedded();
        assert!(corpus.len(Language::English) > 100);
        assert!(corpus.len(Language::Russian) > 50);
        assert!(corpus.words(Language::English).contains("xylophone"));
        assert!(corpus.words(Language::Russian).contains("яблоко"));
    }

    #[test]
    fn test_embedded_words_are_lowercase() {
        let corpus = WordCorpus::embedded();
        for lang in Language::all() {
            for word in corpus.words(*lang) {
                assert_eq!(word, &word.to_lowercase(), "{} is not lowercase", word);
                assert!(!word.starts_with('#'));
            }
        }
    }

    #[test]
    fn test_missing_language_is_empty() {
        let corpus = WordCorpus::new().with_words(Language::English, ["cat"]);
        assert!(corpus.is_empty(Language::Russian));
        assert_eq!(corpus.len(Language::English), 1);
    }

    #[test]
    fn test_with_words_normalizes() {
        let corpus = WordCorpus::new().with_words(Language::English, ["Cat", " DOG ", "", "cat"]);
        let words: Vec<&String> = corpus.words(Language::English).iter().collect();
        assert_eq!(words, vec!["cat", "dog"]);
    }

    #[test]
    fn test_load_dir_overrides_present_files() {
        let dir = temp_dir("override");
        fs::write(dir.join("en.txt"), "# custom\nRocket\nplanet\n").unwrap();

        let corpus = WordCorpus::load_dir(&dir).unwrap();

        assert_eq!(corpus.len(Language::English), 2);
        assert!(corpus.words(Language::English).contains("rocket"));
        // No ru.txt: bundled list stays
        assert_eq!(
            corpus.len(Language::Russian),
            WordCorpus::embedded().len(Language::Russian)
        );

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_dir_rejects_missing_directory() {
        let dir = std::env::temp_dir().join("unscramble-definitely-missing-dir");
        let err = WordCorpus::load_dir(&dir).unwrap_err();
        assert!(matches!(err, Error::NotADirectory(_)));
    }

    #[test]
    fn test_from_config_without_dir_is_embedded() {
        let corpus = WordCorpus::from_config(&GameConfig::default()).unwrap();
        assert_eq!(
            corpus.len(Language::English),
            WordCorpus::embedded().len(Language::English)
        );
    }
}
