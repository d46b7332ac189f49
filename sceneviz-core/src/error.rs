//! Error types for sceneviz

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sceneviz operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Shape mismatch in {context}: expected {expected} rows, found {found}")]
    ShapeMismatch {
        context: String,
        expected: usize,
        found: usize,
    },

    #[error("Cannot prepare export destination {path:?}: {source}")]
    DestinationConflict {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Referenced asset does not exist: {path:?}")]
    MissingAsset { path: PathBuf },

    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    #[error("Element name '{0}' is reserved")]
    ReservedName(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl Error {
    /// Build a [`Error::ShapeMismatch`] for an attribute whose row count disagrees
    pub fn shape_mismatch(context: impl Into<String>, expected: usize, found: usize) -> Self {
        Error::ShapeMismatch {
            context: context.into(),
            expected,
            found,
        }
    }
}

/// Result type alias for sceneviz operations
pub type Result<T> = std::result::Result<T, Error>;

/// Fail with [`Error::ShapeMismatch`] unless `found == expected`
pub(crate) fn ensure_rows(context: &str, expected: usize, found: usize) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(Error::shape_mismatch(context, expected, found))
    }
}
