//! Errors raised while configuring the game and loading word lists
//!
//! The engine itself never fails; these cover the ambient layers around it.

use std::io;
use std::path::PathBuf;

/// Errors from configuration, word-list loading and log setup
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An environment variable held something that is not a number
    #[error("{var} must be a number, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    /// A game needs at least one round
    #[error("{var} must be at least 1")]
    ZeroRounds { var: &'static str },

    /// The highest reachable score does not fit in a `u32`
    #[error("{max_rounds} rounds of {score_increment} points overflow the score")]
    ScoreOverflow { max_rounds: u32, score_increment: u32 },

    /// Language code other than `ru` or `en`
    #[error("unknown language code {0:?} (expected \"ru\" or \"en\")")]
    UnknownLanguage(String),

    /// A word list exists but could not be read
    #[error("failed to read word list {}: {source}", path.display())]
    WordList {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The word-list override is not a directory
    #[error("word list path {} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// Could not determine the OS data directory
    #[error("could not determine data directory")]
    NoDataDirectory,

    /// Failed to create the data directory or open the log file
    #[error("failed to open log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result alias for fallible setup code
pub type Result<T> = std::result::Result<T, Error>;
