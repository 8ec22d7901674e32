// errors.rs
use std::path::PathBuf;

/// Errors originating from the server logic
/// (routing, bad query values, etc.) or downstream layers (export).
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),

    #[error("Internal Server Error")]
    InternalError,
}

/// Failures while reading the listings file. None of these are recoverable;
/// the dashboard has nothing to show without data.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("required column '{0}' is missing")]
    MissingColumn(&'static str),

    #[error("row {row}: expected at most {expected} fields, found {found}")]
    TooManyFields {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row}: column '{column}' has non-numeric value '{value}'")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum DataError {
    #[error("dataset has no priced rows")]
    EmptyDataset,
}
