// src/domain/errors.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Data unavailable: {0}")]
    Data(#[from] DataError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Failures while loading the sales dataset.
///
/// Every variant is fatal: the loader never hands out a partial dataset.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Cannot read {path}: {source}")]
    Missing {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Malformed CSV at row {row}: {reason}")]
    Malformed { row: usize, reason: String },

    #[error("Invalid order date at row {row}: {value:?}")]
    InvalidDate { row: usize, value: String },

    #[error("Invalid {field} at row {row}: {value:?}")]
    InvalidNumber {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("Sales total overflows at row {row}")]
    SalesOverflow { row: usize },
}

impl DataError {
    /// Data row (1-based, header excluded) the error points at, if any.
    pub fn row(&self) -> Option<usize> {
        match self {
            DataError::Malformed { row, .. }
            | DataError::InvalidDate { row, .. }
            | DataError::InvalidNumber { row, .. }
            | DataError::SalesOverflow { row } => Some(*row),
            DataError::Missing { .. } | DataError::MissingColumn(_) => None,
        }
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
pub type DataResult<T> = Result<T, DataError>;
