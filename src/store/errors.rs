//! Record store errors
//!
//! `Duplicate` and `NotFound` are outcomes the caller reports to clients.
//! `Io`, `Corruption` and `Serialization` are store failures and must be
//! surfaced as internal errors.

use std::io;

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// A record with the same value or content hash already exists
    #[error("Record already exists: {content_hash}")]
    Duplicate { content_hash: String },

    /// No record with the given value
    #[error("Record not found: {value}")]
    NotFound { value: String },

    /// Underlying file operation failed
    #[error("Store I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: io::Error,
    },

    /// Log entry failed checksum or structural validation
    #[error("Store log corrupted at line {line}: {reason}")]
    Corruption { line: usize, reason: String },

    /// Entry could not be encoded
    #[error("Store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The log no longer ends where the last committed entry ended.
    /// Writes are refused until the store is reopened.
    #[error("Store log length is {actual} bytes, expected {expected}; reopen required")]
    LogDiverged { expected: u64, actual: u64 },

    /// A lock was poisoned by a panicking writer
    #[error("Store lock poisoned")]
    Poisoned,
}

impl StoreError {
    pub(crate) fn io(message: impl Into<String>, source: io::Error) -> Self {
        StoreError::Io {
            message: message.into(),
            source,
        }
    }

    pub(crate) fn corruption(line: usize, reason: impl Into<String>) -> Self {
        StoreError::Corruption {
            line,
            reason: reason.into(),
        }
    }

    /// True for failures of the store itself, as opposed to lookup outcomes
    pub fn is_internal(&self) -> bool {
        !matches!(
            self,
            StoreError::Duplicate { .. } | StoreError::NotFound { .. }
        )
    }
}
