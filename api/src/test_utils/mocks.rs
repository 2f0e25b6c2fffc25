//! Mock implementations of port traits
//!
//! Deterministic stand-ins for the clock and id ports, plus a repository
//! that fails every call.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::entities::{Webinar, WebinarId};
use crate::domain::ports::{Clock, IdGenerator, WebinarRepository};
use crate::error::StorageError;

// ============================================================================
// Fixed Clock
// ============================================================================

pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

// ============================================================================
// Sequential Id Generator
// ============================================================================

/// Hands out `id-1`, `id-2`, ...
#[derive(Default)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self) -> WebinarId {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        WebinarId(format!("id-{}", n))
    }
}

// ============================================================================
// Failing Webinar Repository
// ============================================================================

/// Repository whose every operation fails with a database error
pub struct FailingWebinarRepository;

#[async_trait]
impl WebinarRepository for FailingWebinarRepository {
    async fn create(&self, _webinar: &Webinar) -> Result<(), StorageError> {
        Err(StorageError::Database("connection refused".to_string()))
    }

    async fn find_by_id(&self, _id: &WebinarId) -> Result<Option<Webinar>, StorageError> {
        Err(StorageError::Database("connection refused".to_string()))
    }

    async fn update(&self, _webinar: &Webinar) -> Result<(), StorageError> {
        Err(StorageError::Database("connection refused".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_now;

    #[test]
    fn fixed_clock_never_moves() {
        let clock = FixedClock::new(test_now());
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn sequential_ids_count_up() {
        let ids = SequentialIdGenerator::new();
        assert_eq!(ids.generate(), WebinarId::from("id-1"));
        assert_eq!(ids.generate(), WebinarId::from("id-2"));
    }
}
