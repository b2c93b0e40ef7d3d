//! Test data factories for creating valid test fixtures.

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::domain::entities::waitlist_entry::{LANDING_PAGE_SOURCE, WaitlistEntry};

/// Create a test waitlist entry with sensible defaults.
pub fn create_test_entry(overrides: impl FnOnce(&mut WaitlistEntry)) -> WaitlistEntry {
    let mut entry = WaitlistEntry {
        id: Uuid::new_v4(),
        email: "user@example.com".to_string(),
        source: Some(LANDING_PAGE_SOURCE.to_string()),
        created_at: test_datetime(),
    };
    overrides(&mut entry);
    entry
}

/// Fixed timestamp for reproducible tests.
pub fn test_datetime() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap()
}
