//! Error types for the category store.

use std::path::PathBuf;

use thiserror::Error;

/// Every failure a store operation can report.
///
/// All variants are recoverable: the front end reports them and keeps the
/// previously loaded state.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Expected category file is missing
    #[error("category '{name}' not found")]
    NotFound { name: String },

    /// A category with this name already exists
    #[error("category '{name}' already exists")]
    AlreadyExists { name: String },

    /// File system failure (permissions, disk full, invalid UTF-8)
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rejected user input, e.g. an empty category name
    #[error("invalid input: {0}")]
    Validation(String),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
