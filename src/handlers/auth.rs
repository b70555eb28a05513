use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::errors::AppError;
use crate::models::{LoginRequest, LoginResponse};
use crate::services::auth;
use crate::state::BookingState;

// POST /api/login
// A missing or unreadable body is treated as empty credentials.
pub async fn login(
    State(state): State<Arc<BookingState>>,
    body: Option<Json<LoginRequest>>,
) -> Result<Json<LoginResponse>, AppError> {
    let body = body.map(|Json(b)| b).unwrap_or_default();
    let user = auth::login(&state.users, &body)?;
    tracing::info!(user_id = user.id, role = user.role.as_str(), "login succeeded");
    Ok(Json(user))
}
