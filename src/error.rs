use thiserror::Error;

/// Main error type for gedview
#[derive(Error, Debug)]
pub enum GedviewError {
    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Record store failures that are not SQLite errors
    #[error("Store error: {0}")]
    Store(String),

    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// GEDCOM text that does not yield the expected records
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl GedviewError {
    /// True for failures of the record store (database or transport).
    pub fn is_store_error(&self) -> bool {
        matches!(self, GedviewError::Database(_) | GedviewError::Store(_))
    }
}

/// Convenient Result type using GedviewError
pub type Result<T> = std::result::Result<T, GedviewError>;
