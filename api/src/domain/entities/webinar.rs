//! Webinar domain entity
//!
//! The aggregate root of the service. Created by the organize use case and
//! mutated only through the change-seats use case.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::{User, UserId};

/// Unique identifier for a webinar
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WebinarId(pub String);

impl WebinarId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for WebinarId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for WebinarId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for WebinarId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A scheduled webinar owned by a single organizer
///
/// Carries no validation of its own: the seat and date rules differ between
/// creation and update, so they live in the use cases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Webinar {
    pub id: WebinarId,
    pub organizer_id: UserId,
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub seats: i32,
}

impl Webinar {
    /// Check whether `user` is the organizer of this webinar
    pub fn is_organized_by(&self, user: &User) -> bool {
        self.organizer_id == user.id
    }
}
