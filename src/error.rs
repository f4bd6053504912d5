//! Error types for dirmap

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    /// The root path is missing, not a directory, or cannot be listed.
    /// Raised before any output is produced.
    #[error("cannot access '{}': {source}", path.display())]
    InvalidRoot {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A directory below the root could not be read.
    #[error("cannot read directory '{}': {source}", path.display())]
    UnreadableEntry {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write report to '{}': {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing output: {0}")]
    ConsoleWrite(#[source] io::Error),

    #[error("cannot read config file '{}': {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file '{}': {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ReportError {
    /// Build an `InvalidRoot` error for a path that exists but is not a directory.
    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        ReportError::InvalidRoot {
            path: path.into(),
            source: io::Error::new(io::ErrorKind::NotADirectory, "Not a directory"),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
