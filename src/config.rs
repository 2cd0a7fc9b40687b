//! Game configuration read from the environment

use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::game::Language;

/// Default number of rounds per game
pub const DEFAULT_MAX_ROUNDS: u32 = 10;
/// Default points for a correct guess
pub const DEFAULT_SCORE_INCREMENT: u32 = 20;

const MAX_ROUNDS_VAR: &str = "UNSCRAMBLE_MAX_ROUNDS";
const SCORE_INCREMENT_VAR: &str = "UNSCRAMBLE_SCORE_INCREMENT";
const LANG_VAR: &str = "UNSCRAMBLE_LANG";
const WORDS_DIR_VAR: &str = "UNSCRAMBLE_WORDS_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Rounds per game, at least 1
    pub max_rounds: u32,
    /// Points awarded for each correct guess
    pub score_increment: u32,
    /// Language selected when the game starts
    pub language: Language,
    /// Directory with `ru.txt` / `en.txt` replacing the bundled word lists
    pub words_dir: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
            score_increment: DEFAULT_SCORE_INCREMENT,
            language: Language::default(),
            words_dir: None,
        }
    }
}

impl GameConfig {
    /// Read the configuration from `UNSCRAMBLE_*` environment variables,
    /// using defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_rounds = parse_number(MAX_ROUNDS_VAR, lookup(MAX_ROUNDS_VAR), DEFAULT_MAX_ROUNDS)?;
        if max_rounds == 0 {
            return Err(Error::ZeroRounds { var: MAX_ROUNDS_VAR });
        }

        let score_increment = parse_number(
            SCORE_INCREMENT_VAR,
            lookup(SCORE_INCREMENT_VAR),
            DEFAULT_SCORE_INCREMENT,
        )?;
        if u64::from(max_rounds) * u64::from(score_increment) > u64::from(u32::MAX) {
            return Err(Error::ScoreOverflow {
                max_rounds,
                score_increment,
            });
        }

        let language = match lookup(LANG_VAR) {
            Some(code) if !code.trim().is_empty() => code.parse()?,
            _ => Language::default(),
        };

        let words_dir = lookup(WORDS_DIR_VAR)
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        let config = Self {
            max_rounds,
            score_increment,
            language,
            words_dir,
        };
        tracing::info!(?config, "Configuration loaded");
        Ok(config)
    }
}

fn parse_number(var: &'static str, value: Option<String>, default: u32) -> Result<u32> {
    match value {
        Some(value) if !value.trim().is_empty() => {
            let parsed = value.trim().parse::<u32>();
            parsed.map_err(|_| Error::InvalidNumber { var, value })
        }
        _ => Ok(default),
    }
}
