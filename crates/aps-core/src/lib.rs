// File: `crates/aps-core/src/lib.rs`
pub mod clock;
pub mod collection;
pub mod event;
pub mod expiration;
pub mod record;

pub use clock::{Clock, ManualClock, SystemClock};
pub use collection::ParticipationCollection;
pub use event::Event;
pub use expiration::compute_expiration;
pub use record::{ParticipationRecord, Pseudonym};
