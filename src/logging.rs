//! Log file setup
//!
//! The terminal UI owns stdout, so logs go to `unscramble.log` in the OS data
//! directory (via the `directories` crate):
//! - Linux: `$XDG_DATA_HOME/unscramble/` or `~/.local/share/unscramble/`
//! - macOS: `~/Library/Application Support/unscramble/`

use directories::ProjectDirs;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{Error, Result};

const LOG_FILE_NAME: &str = "unscramble.log";
const DEFAULT_FILTER: &str = "unscramble=info";

/// Directory holding the log file
pub fn data_dir() -> Result<PathBuf> {
    ProjectDirs::from("", "", "unscramble")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(Error::NoDataDirectory)
}

/// Install the global subscriber writing to the log file.
///
/// Filtering follows `RUST_LOG`, defaulting to `unscramble=info`. Returns the log file path.
pub fn init() -> Result<PathBuf> {
    let dir = data_dir()?;
    let path = dir.join(LOG_FILE_NAME);

    fs::create_dir_all(&dir).map_err(|source| Error::LogFile {
        path: path.clone(),
        source,
    })?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| Error::LogFile {
            path: path.clone(),
            source,
        })?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();

    tracing::info!("Logging to {}", path.display());
    Ok(path)
}
