//! Identifier pseudonymization.
//!
//! Turns a raw event identifier into the stable pseudonymous key it is
//! stored under, so the local store never reveals which events a device
//! participates in.

pub mod digest;

pub use digest::{EventDigest, Sha256Digest};
