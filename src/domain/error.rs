//! Domain error types for Bookshelf.
//!
//! These errors represent failures of the record store and of record
//! validation. They are surfaced to the immediate caller; nothing is
//! retried automatically.

use thiserror::Error;

/// Errors from loading or saving the persisted library document.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The document exists but is not a valid JSON array of book
    /// records. Fails the whole load; records are never silently
    /// dropped.
    #[error("library document is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// Reading or writing the document failed at the filesystem level.
    #[error("library storage failed: {0}")]
    Storage(#[from] std::io::Error),
}

/// Errors from boundary validation of a user-supplied record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("publication year {0} is out of range")]
    YearOutOfRange(u16),
}
