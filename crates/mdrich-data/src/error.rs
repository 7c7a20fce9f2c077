use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading or analyzing business records.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse CSV from {source_name}: {source}")]
    Csv {
        source_name: String,
        source: csv::Error,
    },

    #[error("Failed to read workbook {path}: {source}")]
    Workbook {
        path: PathBuf,
        source: calamine::Error,
    },

    #[error("Workbook {0} has no sheets")]
    EmptyWorkbook(PathBuf),

    #[error("Required column not found: {0}")]
    MissingColumn(String),

    #[error("Could not parse dimensions from: {0:?}")]
    UnparseableDimensions(String),

    #[error("Invalid keyword pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
}
