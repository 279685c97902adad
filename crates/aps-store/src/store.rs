//! The record store: load, purge, and save over the single slot key.

use crate::error::{Result, StoreError};
use crate::slot::KeyValueSlot;
use aps_core::ParticipationCollection;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Storage key the collection is persisted under.
pub const PARTICIPATIONS_KEY: &str = "anonymous_participations";

/// Owns the serialized collection held in one slot key.
///
/// There is no partial persistence: every save rewrites the whole blob,
/// and there is no locking across load-mutate-save sequences. Concurrent
/// operations are last-write-wins on the entire collection, which is
/// acceptable for a single-user, human-triggered store.
pub struct RecordStore {
    slot: Arc<dyn KeyValueSlot>,
    key: String,
}

impl RecordStore {
    /// Create a store over the default participations key.
    pub fn new(slot: Arc<dyn KeyValueSlot>) -> Self {
        Self::with_key(slot, PARTICIPATIONS_KEY)
    }

    /// Create a store over a custom slot key.
    pub fn with_key(slot: Arc<dyn KeyValueSlot>, key: impl Into<String>) -> Self {
        Self {
            slot,
            key: key.into(),
        }
    }

    /// The slot key this store persists under.
    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// Read the persisted collection. An absent blob is an empty
    /// collection; a malformed one is a [`StoreError::Corrupted`].
    pub fn load(&self) -> Result<ParticipationCollection> {
        match self.slot.get(&self.key)? {
            Some(raw) => {
                serde_json::from_str(&raw).map_err(|e| StoreError::Corrupted(e.to_string()))
            }
            None => Ok(ParticipationCollection::new()),
        }
    }

    /// Load and purge in one step: the collection with every record
    /// expired at `now` already dropped. All read paths go through this.
    pub fn load_live(&self, now: DateTime<Utc>) -> Result<ParticipationCollection> {
        let mut collection = self.load()?;
        collection.purge_expired(now);
        Ok(collection)
    }

    /// Serialize the full collection and overwrite the persisted blob.
    pub fn save(&self, collection: &ParticipationCollection) -> Result<()> {
        let raw = serde_json::to_string(collection)?;
        self.slot.set(&self.key, &raw)?;
        Ok(())
    }
}
