//! Error types for the persistence layer.

use thiserror::Error;

/// Errors raised by a key-value slot backend.
#[derive(Error, Debug, Clone)]
pub enum SlotError {
    #[error("Storage slot unavailable: {0}")]
    Unavailable(String),

    #[error("Storage I/O failure: {0}")]
    Io(String),
}

/// Errors raised by the record store.
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    /// The underlying slot failed; there is no fallback for a broken
    /// storage substrate.
    #[error("Storage slot error: {0}")]
    Slot(#[from] SlotError),

    /// The persisted blob did not parse. Deliberately not self-healed:
    /// resetting to an empty collection would destroy live records, so
    /// the caller owns the clear-and-retry decision.
    #[error("Corrupted participation data: {0}")]
    Corrupted(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
