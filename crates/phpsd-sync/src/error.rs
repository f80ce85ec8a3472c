//! Error types for phpsd-sync

use std::path::PathBuf;

/// Result type for phpsd-sync operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while synchronizing file trees
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// One side of a file pair is not valid PHP.
    #[error(transparent)]
    Syntax(#[from] phpsd_syntax::Error),

    /// Patch application failed; the file is left untouched.
    #[error(transparent)]
    Patch(#[from] phpsd_diff::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
