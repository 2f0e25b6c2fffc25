//! PostgreSQL adapter for WebinarRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    SqlErr,
};

use crate::domain::entities::{UserId, Webinar, WebinarId};
use crate::domain::ports::WebinarRepository;
use crate::entity::webinars;
use crate::error::StorageError;

/// PostgreSQL implementation of WebinarRepository
pub struct PostgresWebinarRepository {
    db: DatabaseConnection,
}

impl PostgresWebinarRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WebinarRepository for PostgresWebinarRepository {
    async fn create(&self, webinar: &Webinar) -> Result<(), StorageError> {
        webinars::ActiveModel::from(webinar)
            .insert(&self.db)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    StorageError::AlreadyExists(format!("Webinar {} already exists", webinar.id))
                }
                _ => database(e),
            })?;

        Ok(())
    }

    async fn find_by_id(&self, id: &WebinarId) -> Result<Option<Webinar>, StorageError> {
        let result = webinars::Entity::find_by_id(id.0.clone())
            .one(&self.db)
            .await
            .map_err(database)?;

        Ok(result.map(|m| m.into()))
    }

    async fn update(&self, webinar: &Webinar) -> Result<(), StorageError> {
        let result = webinars::Entity::update_many()
            .set(webinars::ActiveModel::from(webinar))
            .filter(webinars::Column::Id.eq(webinar.id.as_str()))
            .exec(&self.db)
            .await
            .map_err(database)?;

        if result.rows_affected == 0 {
            Err(StorageError::NotFound(format!(
                "Webinar {} not found",
                webinar.id
            )))
        } else {
            Ok(())
        }
    }
}

fn database(e: DbErr) -> StorageError {
    StorageError::Database(e.to_string())
}

/// Convert domain entity to SeaORM active model
impl From<&Webinar> for webinars::ActiveModel {
    fn from(webinar: &Webinar) -> Self {
        webinars::ActiveModel {
            id: Set(webinar.id.0.clone()),
            organizer_id: Set(webinar.organizer_id.0.clone()),
            title: Set(webinar.title.clone()),
            seats: Set(webinar.seats),
            start_date: Set(webinar.start_date.fixed_offset()),
            end_date: Set(webinar.end_date.fixed_offset()),
        }
    }
}

/// Convert SeaORM model to domain entity
impl From<webinars::Model> for Webinar {
    fn from(model: webinars::Model) -> Self {
        Webinar {
            id: WebinarId(model.id),
            organizer_id: UserId(model.organizer_id),
            title: model.title,
            start_date: model.start_date.with_timezone(&Utc),
            end_date: model.end_date.with_timezone(&Utc),
            seats: model.seats,
        }
    }
}
