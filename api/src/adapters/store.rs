//! Storage backend selection
//!
//! `WebinarStore` is the repository the server is wired with. It delegates to
//! whichever adapter the configuration picked at startup.

use async_trait::async_trait;

use super::{InMemoryWebinarRepository, PostgresWebinarRepository};
use crate::domain::entities::{Webinar, WebinarId};
use crate::domain::ports::WebinarRepository;
use crate::error::StorageError;

pub enum WebinarStore {
    InMemory(InMemoryWebinarRepository),
    Postgres(PostgresWebinarRepository),
}

impl WebinarStore {
    pub fn backend(&self) -> &'static str {
        match self {
            WebinarStore::InMemory(_) => "memory",
            WebinarStore::Postgres(_) => "postgres",
        }
    }
}

#[async_trait]
impl WebinarRepository for WebinarStore {
    async fn create(&self, webinar: &Webinar) -> Result<(), StorageError> {
        match self {
            WebinarStore::InMemory(repo) => repo.create(webinar).await,
            WebinarStore::Postgres(repo) => repo.create(webinar).await,
        }
    }

    async fn find_by_id(&self, id: &WebinarId) -> Result<Option<Webinar>, StorageError> {
        match self {
            WebinarStore::InMemory(repo) => repo.find_by_id(id).await,
            WebinarStore::Postgres(repo) => repo.find_by_id(id).await,
        }
    }

    async fn update(&self, webinar: &Webinar) -> Result<(), StorageError> {
        match self {
            WebinarStore::InMemory(repo) => repo.update(webinar).await,
            WebinarStore::Postgres(repo) => repo.update(webinar).await,
        }
    }
}
