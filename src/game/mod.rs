//! Game logic: word lists, word selection, scrambling, rounds and scoring

pub mod corpus;
pub mod engine;
pub mod language;
pub mod scramble;
pub mod selector;
pub mod state;

pub use corpus::WordCorpus;
pub use engine::GameEngine;
pub use language::Language;
pub use scramble::scramble;
pub use selector::{pick_word, FALLBACK_WORDS};
pub use state::GameState;
