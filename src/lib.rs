//! Unscramble - guess the word behind the shuffled letters
//!
//! The engine picks unused words from a per-language word list, scrambles
//! them, checks guesses and keeps score over a fixed number of rounds.

pub mod config;
pub mod error;
pub mod game;
pub mod logging;

pub use config::GameConfig;
pub use error::{Error, Result};
pub use game::{GameEngine, GameState, Language, WordCorpus};
