//! Data loading error types
//!
//! Every variant here is fatal at startup: the dashboard has nothing to
//! show without its table.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the launch table
#[derive(Error, Debug)]
pub enum DataError {
    /// Dataset file could not be opened or read
    #[error("Failed to read dataset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV structure or a field value could not be parsed
    #[error("Malformed dataset at line {line}: {message}")]
    Csv { line: u64, message: String },

    /// Dataset parsed but holds no records
    #[error("Dataset contains no launch records")]
    Empty,

    /// A record parsed but carries an unusable value
    #[error("Invalid record at line {line}: {message}")]
    InvalidRecord { line: u64, message: String },

    /// A launch site collides with the "all sites" option value or label
    #[error("Launch site name {0:?} is reserved")]
    ReservedSiteName(String),
}

impl From<csv::Error> for DataError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        DataError::Csv {
            line,
            message: err.to_string(),
        }
    }
}

/// Result type alias for data operations
pub type DataResult<T> = Result<T, DataError>;
