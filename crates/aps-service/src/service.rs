//! The participation service: public operations over the local store.
//!
//! Per pseudonymous key the states are Absent -> Unconfirmed ->
//! Confirmed, with Absent also reachable from either state via removal
//! or expiry purge.

use std::sync::Arc;

use aps_core::{compute_expiration, Clock, Event, ParticipationRecord, SystemClock};
use aps_digest::{EventDigest, Sha256Digest};
use aps_store::{KeyValueSlot, RecordStore};
use tracing::{debug, trace};

use crate::error::{ParticipationError, Result};

/// Tracks anonymous event participations on one device.
///
/// All three collaborators are injected capabilities: the key-value slot
/// the collection persists through, the digest deriving pseudonymous
/// keys, and the clock driving expiry purges. Operations are async only
/// because the digest may suspend; there is no locking around
/// load-mutate-save, so concurrent operations are last-write-wins on the
/// whole persisted collection.
pub struct ParticipationService {
    digest: Arc<dyn EventDigest>,
    clock: Arc<dyn Clock>,
    store: RecordStore,
}

impl ParticipationService {
    /// Create a service with explicit capabilities.
    pub fn new(
        slot: Arc<dyn KeyValueSlot>,
        digest: Arc<dyn EventDigest>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            digest,
            clock,
            store: RecordStore::new(slot),
        }
    }

    /// Create a service with SHA-256 pseudonymization and the wall clock.
    pub fn with_system_defaults(slot: Arc<dyn KeyValueSlot>) -> Self {
        Self::new(slot, Arc::new(Sha256Digest::new()), Arc::new(SystemClock::new()))
    }

    /// Register an unconfirmed participation in `event`.
    ///
    /// Inserts or overwrites the record for the event's pseudonymous key
    /// with `{token, expiration, confirmed: false}`. Re-registering is an
    /// allowed reset: the whole record is replaced, including a previous
    /// confirmation.
    pub async fn register(
        &self,
        event: &Event,
        cancellation_token: impl Into<String> + Send,
    ) -> Result<()> {
        let key = self.digest.pseudonymize(&event.uuid).await;
        let expiration = compute_expiration(event.expiration_reference());

        let mut participations = self.store.load_live(self.clock.now())?;
        participations.insert(
            key.clone(),
            ParticipationRecord::new(cancellation_token, expiration),
        );
        self.store.save(&participations)?;

        debug!(
            pseudonym = key.short(),
            %expiration,
            "registered unconfirmed participation"
        );
        Ok(())
    }

    /// Confirm a previously registered participation.
    ///
    /// Silent no-op when no live record exists: confirmation may
    /// legitimately race with expiration or be called defensively.
    pub async fn confirm(&self, event_uuid: &str) -> Result<()> {
        let key = self.digest.pseudonymize(event_uuid).await;
        let mut participations = self.store.load_live(self.clock.now())?;

        match participations.get_mut(&key) {
            Some(record) => {
                record.confirm();
                self.store.save(&participations)?;
                debug!(pseudonym = key.short(), "confirmed participation");
            }
            None => {
                trace!(pseudonym = key.short(), "confirm without live record, ignoring");
            }
        }
        Ok(())
    }

    /// Whether a live, confirmed participation exists for `event_uuid`.
    ///
    /// Absent and unconfirmed both resolve to `false`; only a substrate
    /// failure errors.
    pub async fn is_participating(&self, event_uuid: &str) -> Result<bool> {
        match self.get_participation(event_uuid).await {
            Ok(record) => Ok(record.confirmed()),
            Err(ParticipationError::NotFound(_)) => Ok(false),
            Err(other) => Err(other),
        }
    }

    /// Fetch the live participation record for `event_uuid`.
    ///
    /// The one operation with an explicit domain error: fails with
    /// [`ParticipationError::NotFound`] when no live record matches.
    pub async fn get_participation(&self, event_uuid: &str) -> Result<ParticipationRecord> {
        let key = self.digest.pseudonymize(event_uuid).await;
        let participations = self.store.load_live(self.clock.now())?;

        trace!(pseudonym = key.short(), "looking up participation");
        participations
            .get(&key)
            .cloned()
            .ok_or_else(|| ParticipationError::NotFound(event_uuid.to_string()))
    }

    /// Fetch the cancellation token for `event_uuid`.
    ///
    /// Propagates [`ParticipationError::NotFound`] unchanged.
    pub async fn get_leave_token(&self, event_uuid: &str) -> Result<String> {
        Ok(self.get_participation(event_uuid).await?.token().to_string())
    }

    /// Remove the participation for `event_uuid`, if any.
    ///
    /// Never errors for an already-gone record.
    pub async fn remove(&self, event_uuid: &str) -> Result<()> {
        let key = self.digest.pseudonymize(event_uuid).await;
        let mut participations = self.store.load_live(self.clock.now())?;

        participations.remove(&key);
        self.store.save(&participations)?;

        debug!(pseudonym = key.short(), "removed participation");
        Ok(())
    }
}
