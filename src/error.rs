//! Error taxonomy
//!
//! The deliberation and scoring cores are total. Only durable cycle
//! export/import and config loading can fail.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Structural validation failure; nothing from the batch was loaded
    #[error("malformed cycle export {path}: {reason}")]
    Malformed { path: PathBuf, reason: String },

    #[error("failed to encode cycles: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid config {path}: {reason}")]
    Config { path: PathBuf, reason: String },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Error::Malformed {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
