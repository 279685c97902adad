//! Persistence for the Anonymous Participation Store.
//!
//! The collection is held in a single string-keyed slot of an injected
//! key-value backend, serialized as one JSON blob. The record store owns
//! the load / purge / save primitives over it; every caller composes them
//! so expired records are dropped on each access.

pub mod error;
pub mod slot;
pub mod store;

pub use error::{Result, SlotError, StoreError};
pub use slot::{FileSlot, KeyValueSlot, MemorySlot};
pub use store::{RecordStore, PARTICIPATIONS_KEY};
