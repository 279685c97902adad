use std::sync::Arc;

use aps_core::Event;
use aps_service::ParticipationService;
use aps_store::{KeyValueSlot, MemorySlot, PARTICIPATIONS_KEY};
use chrono::{Duration, Utc};

fn main() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async_main());
}

async fn async_main() {
    println!("Larimar - Anonymous Participation Store demo\n");

    let slot = Arc::new(MemorySlot::new());
    let service = ParticipationService::with_system_defaults(slot.clone());

    let event = Event::new(
        "8cdd7d20-1a0e-4a89-b2f1-ce4c4d9e6d1a",
        Utc::now() + Duration::days(14),
    );

    // Register an unconfirmed participation
    service
        .register(&event, "cancellation-token-123")
        .await
        .unwrap();
    let record = service.get_participation(&event.uuid).await.unwrap();
    println!(
        "registered:  confirmed={} expires={}",
        record.confirmed(),
        record.expiration()
    );

    // Confirm it (e.g. after the user clicked an email link)
    service.confirm(&event.uuid).await.unwrap();
    println!(
        "confirmed:   participating={}",
        service.is_participating(&event.uuid).await.unwrap()
    );

    // The persisted blob never contains the raw event identifier
    let raw = slot.get(PARTICIPATIONS_KEY).unwrap().unwrap();
    println!("persisted:   {}", raw);

    // Leave the event again
    let token = service.get_leave_token(&event.uuid).await.unwrap();
    service.remove(&event.uuid).await.unwrap();
    println!(
        "left:        token={} participating={}",
        token,
        service.is_participating(&event.uuid).await.unwrap()
    );

    println!("\n✓ Demo completed");
}
