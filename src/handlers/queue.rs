use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::errors::AppError;
use crate::models::{QueueEntry, QueueRegistration, QueueTicket};
use crate::state::QueueState;

use super::ApiJson;

// POST /register
pub async fn register(
    State(state): State<Arc<QueueState>>,
    ApiJson(body): ApiJson<QueueRegistration>,
) -> Result<Json<QueueTicket>, AppError> {
    let ticket = state.queue().register(body)?;
    Ok(Json(ticket))
}

// GET /queue
pub async fn list_queue(State(state): State<Arc<QueueState>>) -> Json<Vec<QueueEntry>> {
    let entries = state.queue().entries().to_vec();
    Json(entries)
}
