//! Error types for participation operations.

use aps_store::StoreError;
use thiserror::Error;

/// Errors surfaced by the participation service.
#[derive(Error, Debug)]
pub enum ParticipationError {
    /// No live (non-expired) record matches the identifier. Raised only
    /// by the identity-resolving reads; the convenience operations catch
    /// or avoid it.
    #[error("Participation not found: {0}")]
    NotFound(String),

    /// The storage substrate failed. Not a domain condition: propagated
    /// unchanged, since the service has no fallback for broken storage.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for participation operations.
pub type Result<T> = std::result::Result<T, ParticipationError>;
