use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::errors::AppError;
use crate::models::{Appointment, BookingRequest};
use crate::state::BookingState;

use super::ApiJson;

// POST /api/bookings
pub async fn book(
    State(state): State<Arc<BookingState>>,
    ApiJson(body): ApiJson<BookingRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.directory().book(body)?;
    Ok(Json(
        serde_json::json!({ "message": "Appointment booked successfully." }),
    ))
}

// GET /api/appointments
// Meant for admins, but nothing here checks the caller.
pub async fn list_appointments(State(state): State<Arc<BookingState>>) -> Json<Vec<Appointment>> {
    let appointments = state.directory().appointments().to_vec();
    Json(appointments)
}
