use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Every failure a handler can report. The `Display` text is what the client sees.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid login credentials.")]
    InvalidCredentials,

    #[error("{0}")]
    MissingFields(&'static str),

    #[error("Please specify a date.")]
    MissingDate,

    #[error("Service is not registered for this doctor.")]
    ServiceNotRegistered,

    #[error("No available times on this date.")]
    NoAvailability,

    #[error("This timeslot is already booked.")]
    AlreadyBooked,

    #[error("Invalid procedure.")]
    InvalidProcedure,

    #[error("{0}")]
    InvalidBody(String),

    #[error("Doctor not found.")]
    DoctorNotFound,

    #[error("This timeslot does not exist.")]
    SlotNotFound,

    #[error("Path not found.")]
    PathNotFound,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::DoctorNotFound | AppError::SlotNotFound | AppError::PathNotFound => {
                StatusCode::NOT_FOUND
            }
            AppError::MissingFields(_)
            | AppError::MissingDate
            | AppError::ServiceNotRegistered
            | AppError::NoAvailability
            | AppError::AlreadyBooked
            | AppError::InvalidProcedure
            | AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::InvalidBody(rejection.body_text())
    }
}

// a path segment that cannot be decoded names nothing we serve
impl From<PathRejection> for AppError {
    fn from(_: PathRejection) -> Self {
        AppError::PathNotFound
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(status = status.as_u16(), error = %self, "request rejected");

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
