//! Expiration policy for participation records.
//!
//! Records outlive their event by a safety margin, but the stored instant
//! is coarsened so the true event date cannot be reconstructed beyond a
//! roughly three-month window: advance the reference by three calendar
//! months, then snap to the first day of the resulting month at midnight
//! UTC.

use chrono::{DateTime, Datelike, TimeZone, Utc};

/// Compute the instant after which a participation record is stale.
///
/// `reference` is the later of the event's end or begin instant. No
/// inputs are rejected; month arithmetic carries into the next year.
pub fn compute_expiration(reference: DateTime<Utc>) -> DateTime<Utc> {
    let months = i64::from(reference.year()) * 12 + i64::from(reference.month0()) + 3;
    // Euclidean division keeps the remainder in 0..12 for pre-year-0 instants
    let year = months.div_euclid(12) as i32;
    let month = months.rem_euclid(12) as u32 + 1;

    Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0)
        .single()
        .expect("first of month at midnight is a valid UTC instant")
}
