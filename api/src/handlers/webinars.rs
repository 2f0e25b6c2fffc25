//! Webinar handlers
//!
//! Endpoints for organizing webinars and changing their capacity.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::app::{ChangeSeatsCommand, OrganizeWebinarCommand};
use crate::domain::entities::{User, Webinar, WebinarId};
use crate::domain::ports::WebinarRepository;
use crate::error::AppError;
use crate::AppState;

/// Seat count as sent by clients: either a JSON number or a numeric string
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SeatsInput {
    Number(i64),
    Text(String),
}

impl SeatsInput {
    fn parse(&self) -> Result<i32, AppError> {
        match self {
            SeatsInput::Number(n) => i32::try_from(*n)
                .map_err(|_| AppError::BadRequest(format!("seats out of range: {}", n))),
            SeatsInput::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| AppError::BadRequest(format!("seats must be an integer, got '{}'", s))),
        }
    }
}

/// Request body for organizing a webinar
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizeWebinarRequest {
    pub title: String,
    pub seats: SeatsInput,
    /// RFC 3339 timestamp
    pub start_date: DateTime<Utc>,
    /// RFC 3339 timestamp
    pub end_date: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct OrganizeWebinarResponse {
    pub id: String,
    pub message: String,
}

/// Request body for changing seats
#[derive(Debug, Deserialize)]
pub struct ChangeSeatsRequest {
    pub seats: SeatsInput,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebinarResponse {
    pub id: String,
    pub organizer_id: String,
    pub title: String,
    pub seats: i32,
    pub start_date: String,
    pub end_date: String,
}

impl From<Webinar> for WebinarResponse {
    fn from(webinar: Webinar) -> Self {
        Self {
            id: webinar.id.0,
            organizer_id: webinar.organizer_id.0,
            title: webinar.title,
            seats: webinar.seats,
            start_date: webinar.start_date.to_rfc3339(),
            end_date: webinar.end_date.to_rfc3339(),
        }
    }
}

/// POST /webinars
///
/// Organize a new webinar owned by the acting user.
pub async fn organize_webinar(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    payload: Result<Json<OrganizeWebinarRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<OrganizeWebinarResponse>), AppError> {
    let Json(request) = payload?;
    let command = OrganizeWebinarCommand {
        user_id: user.id,
        title: request.title,
        seats: request.seats.parse()?,
        start_date: request.start_date,
        end_date: request.end_date,
    };

    let result = state.organize_webinar.execute(command).await?;

    Ok((
        StatusCode::CREATED,
        Json(OrganizeWebinarResponse {
            id: result.id.0,
            message: "Webinar created".to_string(),
        }),
    ))
}

/// POST /webinars/:id/seats
///
/// Raise the seat count of a webinar. Only its organizer may do so.
pub async fn change_seats(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
    payload: Result<Json<ChangeSeatsRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(request) = payload?;
    let command = ChangeSeatsCommand {
        user,
        webinar_id: WebinarId(id),
        seats: request.seats.parse()?,
    };

    state.change_seats.execute(command).await?;

    Ok(Json(MessageResponse {
        message: "Seats updated".to_string(),
    }))
}

/// GET /webinars/:id
pub async fn get_webinar(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<WebinarResponse>, AppError> {
    let webinar = state
        .webinars
        .find_by_id(&WebinarId(id))
        .await?
        .ok_or_else(|| AppError::NotFound("Webinar not found".to_string()))?;

    Ok(Json(webinar.into()))
}
