//! Webinar policy constants
//!
//! Fixed business rules shared by the webinar use cases.

use chrono::{DateTime, Duration, Utc};

/// Minimum number of days between now and a webinar's start date
pub const MIN_LEAD_TIME_DAYS: i64 = 3;

/// Maximum number of seats a webinar may offer
pub const MAX_SEATS: i32 = 1000;

/// Minimum number of seats a webinar may offer
pub const MIN_SEATS: i32 = 1;

/// Check whether `start_date` leaves at least the minimum lead time after `now`
pub fn respects_lead_time(start_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    start_date >= now + Duration::days(MIN_LEAD_TIME_DAYS)
}
