//! Pseudonymous keys and participation records.
//!
//! A `Pseudonym` is the hex digest of a real event identifier; the raw
//! identifier is never persisted. A `ParticipationRecord` is one device's
//! claim to be participating in one event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The pseudonymous key an event is stored under: a lowercase hex digest
/// of the real event identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pseudonym(String);

impl Pseudonym {
    /// Wrap an already-derived hex digest.
    pub fn new(digest: impl Into<String>) -> Self {
        Pseudonym(digest.into())
    }

    /// The full hex string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Truncated display (first 8 chars), safe to log.
    ///
    /// Total for any contents, even though digest-derived keys are
    /// always ASCII hex.
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(8) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl fmt::Display for Pseudonym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One device's claim to be participating in one event.
///
/// `confirmed` starts out `false` and transitions to `true` exactly once,
/// via [`ParticipationRecord::confirm`]. There is no reverse transition;
/// a fresh registration replaces the whole record instead.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParticipationRecord {
    /// Opaque credential needed to later cancel the participation.
    token: String,
    /// Instant after which the record must no longer be observed.
    expiration: DateTime<Utc>,
    /// Whether the participation has been confirmed.
    confirmed: bool,
}

impl ParticipationRecord {
    /// Create a fresh, unconfirmed record.
    pub fn new(token: impl Into<String>, expiration: DateTime<Utc>) -> Self {
        Self {
            token: token.into(),
            expiration,
            confirmed: false,
        }
    }

    /// The cancellation token, stored verbatim.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// When the record stops being valid.
    pub fn expiration(&self) -> DateTime<Utc> {
        self.expiration
    }

    /// Whether the participation has been confirmed.
    pub fn confirmed(&self) -> bool {
        self.confirmed
    }

    /// Mark the participation as confirmed. One-way: there is no unconfirm.
    pub fn confirm(&mut self) {
        self.confirmed = true;
    }

    /// A record expires at or before its expiration instant.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expiration <= now
    }
}
