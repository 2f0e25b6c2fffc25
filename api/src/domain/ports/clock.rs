//! Clock port
//!
//! Supplies the current instant so date rules can be tested deterministically.

use chrono::{DateTime, Utc};

pub trait Clock: Send + Sync {
    /// Current wall-clock time
    fn now(&self) -> DateTime<Utc>;
}
