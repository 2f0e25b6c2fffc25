//! System adapters for the clock and identifier ports

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::WebinarId;
use crate::domain::ports::{Clock, IdGenerator};

/// Wall-clock time from the operating system
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Random v4 UUIDs rendered in hyphenated form
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> WebinarId {
        WebinarId(Uuid::new_v4().to_string())
    }
}
