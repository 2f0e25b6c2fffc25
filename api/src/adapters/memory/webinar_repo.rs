//! In-memory adapter for WebinarRepository
//!
//! Used by unit tests and by the `memory` store for local runs without a
//! database.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::entities::{Webinar, WebinarId};
use crate::domain::ports::WebinarRepository;
use crate::error::StorageError;

#[derive(Default, Clone)]
pub struct InMemoryWebinarRepository {
    webinars: Arc<RwLock<HashMap<WebinarId, Webinar>>>,
}

impl InMemoryWebinarRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a webinar
    #[cfg(test)]
    pub fn with_webinar(self, webinar: Webinar) -> Self {
        self.webinars
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(webinar.id.clone(), webinar);
        self
    }

    /// Synchronous lookup for inspecting state in tests
    #[cfg(test)]
    pub fn get(&self, id: &WebinarId) -> Option<Webinar> {
        self.webinars
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.webinars
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(_: PoisonError<T>) -> StorageError {
    StorageError::Database("in-memory webinar store lock poisoned".to_string())
}

#[async_trait]
impl WebinarRepository for InMemoryWebinarRepository {
    async fn create(&self, webinar: &Webinar) -> Result<(), StorageError> {
        let mut webinars = self.webinars.write().map_err(poisoned)?;
        if webinars.contains_key(&webinar.id) {
            return Err(StorageError::AlreadyExists(format!(
                "Webinar {} already exists",
                webinar.id
            )));
        }
        webinars.insert(webinar.id.clone(), webinar.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &WebinarId) -> Result<Option<Webinar>, StorageError> {
        let webinars = self.webinars.read().map_err(poisoned)?;
        Ok(webinars.get(id).cloned())
    }

    async fn update(&self, webinar: &Webinar) -> Result<(), StorageError> {
        let mut webinars = self.webinars.write().map_err(poisoned)?;
        if let Some(existing) = webinars.get_mut(&webinar.id) {
            *existing = webinar.clone();
            Ok(())
        } else {
            Err(StorageError::NotFound(format!(
                "Webinar {} not found",
                webinar.id
            )))
        }
    }
}
