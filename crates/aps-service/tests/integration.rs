//! End-to-end tests for the participation service over an in-memory
//! slot and a manual clock.

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};

use aps_core::{Event, ManualClock};
use aps_digest::Sha256Digest;
use aps_service::{ParticipationError, ParticipationService};
use aps_store::{KeyValueSlot, MemorySlot, StoreError, PARTICIPATIONS_KEY};

fn instant(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
}

fn service_at(now: DateTime<Utc>) -> (ParticipationService, Arc<MemorySlot>, Arc<ManualClock>) {
    let slot = Arc::new(MemorySlot::new());
    let clock = Arc::new(ManualClock::new(now));
    let service =
        ParticipationService::new(slot.clone(), Arc::new(Sha256Digest::new()), clock.clone());
    (service, slot, clock)
}

#[tokio::test]
async fn test_register_then_get_participation() {
    // Scenario A: begin 2024-01-15, no end, token "tok-A"
    let (service, _slot, _clock) = service_at(instant(2024, 1, 10));
    let event = Event::new("event-1", instant(2024, 1, 15));

    service.register(&event, "tok-A").await.unwrap();

    let record = service.get_participation("event-1").await.unwrap();
    assert_eq!(record.token(), "tok-A");
    assert!(!record.confirmed());
    assert_eq!(
        record.expiration(),
        Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap()
    );
}

#[tokio::test]
async fn test_expiration_derives_from_end_when_known() {
    let (service, _slot, _clock) = service_at(instant(2024, 1, 10));
    let event = Event::new("event-1", instant(2024, 1, 15)).with_end(instant(2024, 3, 20));

    service.register(&event, "tok-A").await.unwrap();

    let record = service.get_participation("event-1").await.unwrap();
    assert_eq!(
        record.expiration(),
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    );
}

#[tokio::test]
async fn test_confirm_then_is_participating() {
    // Scenario B
    let (service, _slot, _clock) = service_at(instant(2024, 1, 10));
    let event = Event::new("event-1", instant(2024, 1, 15));

    service.register(&event, "tok-A").await.unwrap();
    assert!(!service.is_participating("event-1").await.unwrap());

    service.confirm("event-1").await.unwrap();
    assert!(service.is_participating("event-1").await.unwrap());
}

#[tokio::test]
async fn test_expired_registration_is_never_observed() {
    // Scenario C: expiration already in the past at registration time
    let (service, _slot, _clock) = service_at(instant(2024, 6, 1));
    let stale_event = Event::new("event-2", instant(2023, 1, 10));

    service.register(&stale_event, "tok-B").await.unwrap();

    assert!(!service.is_participating("event-2").await.unwrap());
    let err = service.get_participation("event-2").await.unwrap_err();
    assert!(matches!(err, ParticipationError::NotFound(_)));
}

#[tokio::test]
async fn test_leave_token_for_unknown_event_is_not_found() {
    // Scenario D
    let (service, _slot, _clock) = service_at(instant(2024, 1, 10));

    let err = service.get_leave_token("never-registered").await.unwrap_err();
    assert!(matches!(err, ParticipationError::NotFound(_)));
}

#[tokio::test]
async fn test_reregistration_overwrites_whole_record() {
    // Scenario E: overwrite, not merge; confirmation is reset
    let (service, _slot, _clock) = service_at(instant(2024, 1, 10));
    let event = Event::new("event-1", instant(2024, 1, 15));

    service.register(&event, "tok-A").await.unwrap();
    service.confirm("event-1").await.unwrap();
    service.register(&event, "tok-C").await.unwrap();

    let record = service.get_participation("event-1").await.unwrap();
    assert_eq!(record.token(), "tok-C");
    assert!(!record.confirmed());
}

#[tokio::test]
async fn test_get_leave_token_returns_stored_token() {
    let (service, _slot, _clock) = service_at(instant(2024, 1, 10));
    let event = Event::new("event-1", instant(2024, 1, 15));

    service.register(&event, "tok-A").await.unwrap();
    assert_eq!(service.get_leave_token("event-1").await.unwrap(), "tok-A");
}

#[tokio::test]
async fn test_record_expires_as_the_clock_advances() {
    let (service, _slot, clock) = service_at(instant(2024, 1, 10));
    let event = Event::new("event-1", instant(2024, 1, 15));

    service.register(&event, "tok-A").await.unwrap();
    service.confirm("event-1").await.unwrap();
    assert!(service.is_participating("event-1").await.unwrap());

    // Expiration is 2024-04-01; half a year is comfortably past it
    clock.advance(Duration::days(180));

    assert!(!service.is_participating("event-1").await.unwrap());
    let err = service.get_participation("event-1").await.unwrap_err();
    assert!(matches!(err, ParticipationError::NotFound(_)));
}

#[tokio::test]
async fn test_confirm_and_remove_are_absence_safe() {
    let (service, _slot, _clock) = service_at(instant(2024, 1, 10));
    let event = Event::new("event-1", instant(2024, 1, 15));
    service.register(&event, "tok-A").await.unwrap();

    // Unknown identifiers: no error, and the existing record is untouched
    service.confirm("unknown").await.unwrap();
    service.remove("unknown").await.unwrap();

    let record = service.get_participation("event-1").await.unwrap();
    assert_eq!(record.token(), "tok-A");
    assert!(!record.confirmed());
}

#[tokio::test]
async fn test_remove_deletes_the_record() {
    let (service, _slot, _clock) = service_at(instant(2024, 1, 10));
    let event = Event::new("event-1", instant(2024, 1, 15));

    service.register(&event, "tok-A").await.unwrap();
    service.remove("event-1").await.unwrap();

    let err = service.get_participation("event-1").await.unwrap_err();
    assert!(matches!(err, ParticipationError::NotFound(_)));
}

#[tokio::test]
async fn test_confirmation_survives_unrelated_operations() {
    let (service, _slot, _clock) = service_at(instant(2024, 1, 10));
    let event_a = Event::new("event-a", instant(2024, 1, 15));
    let event_b = Event::new("event-b", instant(2024, 2, 20));

    service.register(&event_a, "tok-A").await.unwrap();
    service.confirm("event-a").await.unwrap();

    service.register(&event_b, "tok-B").await.unwrap();
    service.confirm("event-a").await.unwrap();
    service.remove("event-b").await.unwrap();

    assert!(service.is_participating("event-a").await.unwrap());
}

#[tokio::test]
async fn test_persisted_keys_are_pseudonymous() {
    let (service, slot, _clock) = service_at(instant(2024, 1, 10));
    let event = Event::new("super-secret-event-uuid", instant(2024, 1, 15));

    service.register(&event, "tok-A").await.unwrap();

    let raw = slot.get(PARTICIPATIONS_KEY).unwrap().unwrap();
    assert!(!raw.contains("super-secret-event-uuid"));

    // The key is the 64-char hex digest of the identifier
    let pairs: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let key = pairs[0][0].as_str().unwrap();
    assert_eq!(key.len(), 64);
    assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
}

#[tokio::test]
async fn test_state_is_shared_through_the_slot() {
    // Two service instances over the same slot observe each other's writes
    let (service_a, slot, clock) = service_at(instant(2024, 1, 10));
    let service_b =
        ParticipationService::new(slot, Arc::new(Sha256Digest::new()), clock);

    let event = Event::new("event-1", instant(2024, 1, 15));
    service_a.register(&event, "tok-A").await.unwrap();
    service_b.confirm("event-1").await.unwrap();

    assert!(service_a.is_participating("event-1").await.unwrap());
}

#[tokio::test]
async fn test_corrupted_blob_surfaces_as_store_error() {
    let (service, slot, _clock) = service_at(instant(2024, 1, 10));
    slot.set(PARTICIPATIONS_KEY, "{not a pair list").unwrap();

    let err = service.get_participation("event-1").await.unwrap_err();
    assert!(matches!(
        err,
        ParticipationError::Store(StoreError::Corrupted(_))
    ));

    // Convenience operations do not swallow substrate failures either
    assert!(service.is_participating("event-1").await.is_err());
    assert!(service.confirm("event-1").await.is_err());
}
