//! Error taxonomy for extraction and loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while extracting rows from input files or writing them.
///
/// Every variant is fatal for the run. A lookup miss is not an error and has no
/// variant here.
#[derive(Debug, Error)]
pub enum EtlError {
    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Song file {path:?} contains no record")]
    EmptySongFile { path: PathBuf },

    #[error("Invalid record in {path:?}: {reason}")]
    InvalidRecord { path: PathBuf, reason: String },

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}

impl EtlError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EtlError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        EtlError::Parse {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_record(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        EtlError::InvalidRecord {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error comes from the content of an input file rather than
    /// from the filesystem or the database.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            EtlError::Parse { .. } | EtlError::EmptySongFile { .. } | EtlError::InvalidRecord { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
