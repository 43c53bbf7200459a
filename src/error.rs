// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a sample sheet from being produced.
///
/// None of these are recovered from; `main` reports the message and exits.
#[derive(Debug, Error)]
pub enum SheetError {
    /// A library name contains something other than `[A-Za-z0-9_]`.
    #[error("library name '{name}' contains invalid characters (allowed: A-Z, a-z, 0-9, _)")]
    Validation { name: String },

    /// A library points at an index ID the index table does not know.
    #[error("index ID '{index_id}' used by library '{library}' is not in the index table")]
    Lookup { index_id: String, library: String },

    /// A row that is too short to read the required columns from.
    #[error("{}:{line}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        line: u64,
        message: String,
    },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid workflow '{0}' (expected A or B)")]
    InvalidWorkflow(String),
}

pub type Result<T> = std::result::Result<T, SheetError>;

impl SheetError {
    pub(crate) fn io<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        SheetError::Io {
            path: path.into(),
            source,
        }
    }
}
