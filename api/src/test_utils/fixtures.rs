//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::entities::{User, UserId, Webinar, WebinarId};

/// Fixed "now" used by clock-dependent tests
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// The organizer of `test_webinar`
pub fn alice() -> User {
    User::new("alice")
}

/// A user who organizes nothing
pub fn bob() -> User {
    User::new("bob")
}

/// Create a test webinar organized by `alice` with 100 seats
pub fn test_webinar() -> Webinar {
    Webinar {
        id: WebinarId::from("webinar-id"),
        organizer_id: alice().id,
        title: "Webinar title".to_string(),
        start_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        end_date: Utc.with_ymd_and_hms(2024, 1, 1, 1, 0, 0).unwrap(),
        seats: 100,
    }
}

/// Create a test webinar with a specific id, organizer and seat count
pub fn test_webinar_with(id: &str, organizer: &str, seats: i32) -> Webinar {
    Webinar {
        id: WebinarId::from(id),
        organizer_id: UserId::from(organizer),
        seats,
        ..test_webinar()
    }
}
