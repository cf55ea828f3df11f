//! Error kinds raised by journal operations.
use thiserror::Error;

/// Errors returned by [`crate::Journal`] operations.
///
/// Parsing never produces one of these: malformed blocks degrade to partial
/// entries instead.
#[derive(Error, Debug)]
pub enum JournalError {
    /// Rejected user input (empty text, rating outside 1-5, empty search query).
    #[error("invalid input: {0}")]
    Validation(String),

    /// The block to replace is not present in the journal file.
    #[error("original entry not found in journal file")]
    NotFound,

    /// Export requested on a journal without entries.
    #[error("no entries to export")]
    EmptyStore,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type JournalResult<T> = std::result::Result<T, JournalError>;
