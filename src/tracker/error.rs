//! Word tracker errors

use std::path::PathBuf;

use thiserror::Error;

/// Failures reading input text or reading/writing the repository file.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// An input or output file could not be read or written.
    #[error("i/o error on {path}: {source}")]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The repository could not be encoded or decoded.
    #[error("repository format error in {path}: {source}")]
    Format {
        /// The repository file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },
}

impl TrackerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for word tracker operations.
pub type TrackerResult<T> = Result<T, TrackerError>;
