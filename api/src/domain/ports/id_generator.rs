//! Identifier port

use crate::domain::entities::WebinarId;

/// Source of identifiers for new webinars
///
/// Values must be unique across the lifetime of the system.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> WebinarId;
}
