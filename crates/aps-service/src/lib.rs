//! Anonymous participation service.
//!
//! The public operations for tracking, on a single device, which events
//! an anonymous user has asked to participate in: register, confirm,
//! query, fetch the cancellation token, remove. Every operation first
//! pseudonymizes the real event identifier, then loads and purges the
//! persisted collection, then reads or mutates one entry.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use aps_core::Event;
//! use aps_service::ParticipationService;
//! use aps_store::MemorySlot;
//! use chrono::Utc;
//!
//! # async fn demo() -> aps_service::Result<()> {
//! let service = ParticipationService::with_system_defaults(Arc::new(MemorySlot::new()));
//!
//! let event = Event::new("8cdd7d20-1a0e-4a89-b2f1-ce4c4d9e6d1a", Utc::now());
//! service.register(&event, "cancellation-token").await?;
//! service.confirm(&event.uuid).await?;
//!
//! assert!(service.is_participating(&event.uuid).await?);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod service;

pub use error::{ParticipationError, Result};
pub use service::ParticipationService;
