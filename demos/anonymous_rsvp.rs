//! Anonymous RSVP walkthrough: register, confirm, expire, and remove a
//! participation with a simulated clock.
//!
//! Run with: cargo run --example anonymous_rsvp

use std::sync::Arc;

use aps_core::{Event, ManualClock};
use aps_digest::Sha256Digest;
use aps_service::{ParticipationError, ParticipationService};
use aps_store::MemorySlot;
use chrono::{Duration, TimeZone, Utc};

#[tokio::main]
async fn main() {
    let start = Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap();
    let clock = Arc::new(ManualClock::new(start));
    let service = ParticipationService::new(
        Arc::new(MemorySlot::new()),
        Arc::new(Sha256Digest::new()),
        clock.clone(),
    );

    let concert = Event::new("concert-2024-01-15", start + Duration::days(5));

    println!("== registering ==");
    service.register(&concert, "leave-me-token").await.unwrap();
    let record = service.get_participation(&concert.uuid).await.unwrap();
    println!("confirmed: {}", record.confirmed());
    println!("expires:   {}", record.expiration());

    println!("\n== confirming ==");
    service.confirm(&concert.uuid).await.unwrap();
    println!(
        "participating: {}",
        service.is_participating(&concert.uuid).await.unwrap()
    );

    println!("\n== six months later ==");
    clock.advance(Duration::days(180));
    println!(
        "participating: {}",
        service.is_participating(&concert.uuid).await.unwrap()
    );
    match service.get_participation(&concert.uuid).await {
        Err(ParticipationError::NotFound(uuid)) => println!("record gone: {}", uuid),
        other => println!("unexpected: {:?}", other.map(|r| r.confirmed())),
    }

    println!("\n== removal is absence-safe ==");
    service.remove(&concert.uuid).await.unwrap();
    println!("done");
}
