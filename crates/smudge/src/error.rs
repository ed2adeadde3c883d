//! Error types for the smudge library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for smudge operations.
#[derive(Debug, Error)]
pub enum SmudgeError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// File with no header row or no columns.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Plan entry names a column position the table does not have.
    #[error("column index {index} out of range (table has {column_count} columns)")]
    ColumnOutOfRange { index: usize, column_count: usize },

    /// Corruption plan entry could not be parsed.
    #[error("Invalid plan entry: {0}")]
    InvalidPlan(String),
}

/// Result type alias for smudge operations.
pub type Result<T> = std::result::Result<T, SmudgeError>;
