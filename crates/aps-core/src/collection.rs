//! The complete local participation state.
//!
//! A unique-keyed mapping from pseudonymous key to participation record,
//! serialized as a single unit: a JSON list of `[pseudonym, record]`
//! pairs. Purging expired entries is done in place so callers can compose
//! it directly with a load.

use crate::record::{ParticipationRecord, Pseudonym};
use chrono::{DateTime, Utc};
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::collections::HashMap;

/// Mapping from pseudonymous key to participation record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParticipationCollection {
    entries: HashMap<Pseudonym, ParticipationRecord>,
}

impl ParticipationCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Look up a record.
    pub fn get(&self, key: &Pseudonym) -> Option<&ParticipationRecord> {
        self.entries.get(key)
    }

    /// Look up a record for mutation.
    pub fn get_mut(&mut self, key: &Pseudonym) -> Option<&mut ParticipationRecord> {
        self.entries.get_mut(key)
    }

    /// Insert or overwrite a record, returning the previous one if any.
    pub fn insert(
        &mut self,
        key: Pseudonym,
        record: ParticipationRecord,
    ) -> Option<ParticipationRecord> {
        self.entries.insert(key, record)
    }

    /// Remove a record, returning it if it was present.
    pub fn remove(&mut self, key: &Pseudonym) -> Option<ParticipationRecord> {
        self.entries.remove(key)
    }

    /// Check if a key exists.
    pub fn contains(&self, key: &Pseudonym) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries.
    pub fn iter(&self) -> impl Iterator<Item = (&Pseudonym, &ParticipationRecord)> {
        self.entries.iter()
    }

    /// Drop every record whose expiration is at or before `now`, in place.
    ///
    /// Returns the number of records removed. Every read path runs this
    /// before the collection is observed, so no caller ever sees an
    /// expired record.
    pub fn purge_expired(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, record| !record.is_expired(now));
        before - self.entries.len()
    }
}

// Persisted layout: a list of [pseudonym, record] pairs, not a JSON
// object. Deserialization rebuilds the unique-keyed map from the pairs.
impl Serialize for ParticipationCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.iter())
    }
}

impl<'de> Deserialize<'de> for ParticipationCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let pairs = Vec::<(Pseudonym, ParticipationRecord)>::deserialize(deserializer)?;
        Ok(Self {
            entries: pairs.into_iter().collect(),
        })
    }
}
