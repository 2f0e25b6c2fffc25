//! Principal middleware

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};

use crate::domain::entities::User;
use crate::error::AppError;
use crate::AppState;

/// Header carrying the acting user's id
pub const USER_ID_HEADER: &str = "x-user-id";

/// Resolve the acting user for a request
///
/// `None` when the header is absent, `Err` when it is present but unusable.
fn extract_user(request: &Request<Body>) -> Option<Result<User, AppError>> {
    request.headers().get(USER_ID_HEADER).map(|value| {
        let id = value.to_str().map_err(|_| AppError::Unauthorized)?.trim();
        if id.is_empty() {
            return Err(AppError::Unauthorized);
        }
        Ok(User::new(id))
    })
}

/// Principal middleware
///
/// Injects the acting `User` into request extensions. Requests without the
/// header act as the configured default user; an empty or non-text header is
/// rejected with 401.
pub async fn principal_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let user = match extract_user(&request) {
        Some(user) => user?,
        None => User::new(state.config.default_user_id.as_str()),
    };

    tracing::debug!(user_id = %user.id, "Resolved request principal");

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}
