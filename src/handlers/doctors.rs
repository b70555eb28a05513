use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::errors::AppError;
use crate::models::{
    parse_doctor_id, AvailableQuery, Doctor, DoctorSummary, NewDoctor, NewTimeslots, TimeSlot,
    TimeslotsAdded,
};
use crate::state::BookingState;

use super::{ApiJson, ApiPath, ApiQuery};

// GET /api/doctors
pub async fn list_doctors(State(state): State<Arc<BookingState>>) -> Json<Vec<DoctorSummary>> {
    let doctors = state.directory().list_doctors();
    Json(doctors)
}

// POST /api/doctors
pub async fn create_doctor(
    State(state): State<Arc<BookingState>>,
    ApiJson(body): ApiJson<NewDoctor>,
) -> Result<Json<Doctor>, AppError> {
    let doctor = state.directory().create_doctor(body)?;
    Ok(Json(doctor))
}

// POST /api/doctors/:id/timeslots
pub async fn add_timeslots(
    State(state): State<Arc<BookingState>>,
    ApiPath(raw_id): ApiPath<String>,
    ApiJson(body): ApiJson<NewTimeslots>,
) -> Result<Json<TimeslotsAdded>, AppError> {
    let doctor_id = parse_doctor_id(&raw_id).ok_or(AppError::DoctorNotFound)?;
    let schedule = state.directory().add_timeslots(doctor_id, body)?;

    Ok(Json(TimeslotsAdded {
        message: "Timeslots added successfully.",
        schedule,
    }))
}

// GET /api/doctors/:id/available?date=YYYY-MM-DD
pub async fn available_slots(
    State(state): State<Arc<BookingState>>,
    ApiPath(raw_id): ApiPath<String>,
    ApiQuery(query): ApiQuery<AvailableQuery>,
) -> Result<Json<Vec<TimeSlot>>, AppError> {
    let doctor_id = parse_doctor_id(&raw_id).ok_or(AppError::DoctorNotFound)?;
    let slots = state
        .directory()
        .available_slots(doctor_id, query.date.as_deref())?;
    Ok(Json(slots))
}
