//! The slice of an event that participation tracking consumes.
//!
//! The event platform owns the full event object; this module only needs
//! a unique identifier and the time bounds used to derive an expiration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An event as seen by the participation store.
///
/// `begins_on` is mandatory; `ends_on` is optional because many events
/// are published without a known end.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier issued by the event platform.
    pub uuid: String,
    /// When the event starts.
    pub begins_on: DateTime<Utc>,
    /// When the event ends, if known.
    pub ends_on: Option<DateTime<Utc>>,
}

impl Event {
    /// Create an event with no end instant.
    pub fn new(uuid: impl Into<String>, begins_on: DateTime<Utc>) -> Self {
        Self {
            uuid: uuid.into(),
            begins_on,
            ends_on: None,
        }
    }

    /// Set the end instant.
    pub fn with_end(mut self, ends_on: DateTime<Utc>) -> Self {
        self.ends_on = Some(ends_on);
        self
    }

    /// The instant expiration is computed from: the end if known,
    /// otherwise the begin.
    pub fn expiration_reference(&self) -> DateTime<Utc> {
        self.ends_on.unwrap_or(self.begins_on)
    }
}
