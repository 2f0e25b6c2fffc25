//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (in-memory, PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{Webinar, WebinarId};
use crate::error::StorageError;

/// Repository for Webinar aggregates
#[async_trait]
pub trait WebinarRepository: Send + Sync {
    /// Persist a new webinar
    ///
    /// Fails with `StorageError::AlreadyExists` if the id is already taken.
    async fn create(&self, webinar: &Webinar) -> Result<(), StorageError>;

    /// Find a webinar by ID
    async fn find_by_id(&self, id: &WebinarId) -> Result<Option<Webinar>, StorageError>;

    /// Overwrite the full state of an existing webinar
    ///
    /// Fails with `StorageError::NotFound` if the id is unknown.
    async fn update(&self, webinar: &Webinar) -> Result<(), StorageError>;
}
