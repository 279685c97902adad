//! The digest capability and its SHA-256 implementation.

use aps_core::Pseudonym;
use async_trait::async_trait;
use sha2::{Digest, Sha256};

/// One-way derivation of pseudonymous keys from event identifiers.
///
/// Contract: deterministic within one runtime, effectively collision-free
/// for realistic identifier spaces, and not reversible by the caller. The
/// signature is infallible: without a digest no pseudonymous key can be
/// derived, so an implementation that cannot compute one has no recovery
/// path and must panic.
///
/// Async because the underlying primitive may require suspension (e.g. a
/// platform crypto API); this is the only suspension point in any
/// participation operation.
#[async_trait]
pub trait EventDigest: Send + Sync {
    /// Derive the pseudonymous key for a raw event identifier.
    async fn pseudonymize(&self, identifier: &str) -> Pseudonym;
}

/// SHA-256 over the identifier's UTF-8 bytes, rendered as lowercase hex.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256Digest;

impl Sha256Digest {
    /// Create a new digest adapter.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventDigest for Sha256Digest {
    async fn pseudonymize(&self, identifier: &str) -> Pseudonym {
        let digest = Sha256::digest(identifier.as_bytes());
        let hex: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
        Pseudonym::new(hex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_pseudonymize_is_deterministic() {
        let digest = Sha256Digest::new();

        let k1 = digest.pseudonymize("8cdd7d20-1a0e-4a89-b2f1-ce4c4d9e6d1a").await;
        let k2 = digest.pseudonymize("8cdd7d20-1a0e-4a89-b2f1-ce4c4d9e6d1a").await;

        assert_eq!(k1, k2);
    }

    #[tokio::test]
    async fn test_distinct_identifiers_get_distinct_keys() {
        let digest = Sha256Digest::new();

        let k1 = digest.pseudonymize("event-one").await;
        let k2 = digest.pseudonymize("event-two").await;

        assert_ne!(k1, k2);
    }

    #[tokio::test]
    async fn test_key_is_64_lowercase_hex_chars() {
        let digest = Sha256Digest::new();
        let key = digest.pseudonymize("anything").await;

        assert_eq!(key.as_str().len(), 64);
        assert!(key.as_str().chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[tokio::test]
    async fn test_known_vectors() {
        let digest = Sha256Digest::new();

        assert_eq!(
            digest.pseudonymize("").await.as_str(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            digest.pseudonymize("abc").await.as_str(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
