//! Unified error types for the webinar API
//!
//! This module defines error types for each layer:
//! - `StorageError`: Repository (persistence) errors
//! - `OrganizeWebinarError` / `ChangeSeatsError`: Closed sets of use case failures
//! - `AppError`: HTTP layer errors (wraps use case errors for responses)

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::app::webinar_policy::{MAX_SEATS, MIN_LEAD_TIME_DAYS, MIN_SEATS};

/// Persistence errors raised by repository adapters
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Entity already exists: {0}")]
    AlreadyExists(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Failures of the organize-webinar use case
#[derive(Debug, Error)]
pub enum OrganizeWebinarError {
    #[error("Webinar must be scheduled at least {} days in advance", MIN_LEAD_TIME_DAYS)]
    DatesTooSoon,

    #[error("Webinar must have at most {} seats", MAX_SEATS)]
    TooManySeats,

    #[error("Webinar must have at least {} seat", MIN_SEATS)]
    NotEnoughSeats,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Failures of the change-seats use case
#[derive(Debug, Error)]
pub enum ChangeSeatsError {
    #[error("Webinar not found")]
    NotFound,

    #[error("User is not allowed to update this webinar")]
    NotOrganizer,

    #[error("You cannot reduce the number of seats")]
    SeatsCannotDecrease,

    #[error("Webinar must have at most {} seats", MAX_SEATS)]
    TooManySeats,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Organize(#[from] OrganizeWebinarError),

    #[error(transparent)]
    ChangeSeats(#[from] ChangeSeatsError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("{0}")]
    NotFound(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

const UNEXPECTED_ERROR: &str = "An error occurred";

impl AppError {
    fn status_and_body(&self) -> (StatusCode, String, Option<String>) {
        match self {
            AppError::Organize(e) => match e {
                OrganizeWebinarError::DatesTooSoon
                | OrganizeWebinarError::TooManySeats
                | OrganizeWebinarError::NotEnoughSeats => {
                    (StatusCode::BAD_REQUEST, e.to_string(), None)
                }
                OrganizeWebinarError::Storage(storage) => internal(storage),
            },
            AppError::ChangeSeats(e) => match e {
                ChangeSeatsError::NotFound => (StatusCode::NOT_FOUND, e.to_string(), None),
                ChangeSeatsError::NotOrganizer => (StatusCode::UNAUTHORIZED, e.to_string(), None),
                ChangeSeatsError::SeatsCannotDecrease | ChangeSeatsError::TooManySeats => {
                    (StatusCode::BAD_REQUEST, e.to_string(), None)
                }
                ChangeSeatsError::Storage(storage) => internal(storage),
            },
            AppError::Storage(e) => internal(e),
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                "Bad request".to_string(),
                Some(msg.clone()),
            ),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string(), None),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone(), None),
        }
    }
}

fn internal(cause: &dyn std::fmt::Display) -> (StatusCode, String, Option<String>) {
    tracing::error!("Internal error: {}", cause);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        UNEXPECTED_ERROR.to_string(),
        None,
    )
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = self.status_and_body();
        (status, Json(ErrorResponse { error, details })).into_response()
    }
}
