use std::sync::Arc;

use axum::extract::Request;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::front_end::FrontEnd;
use crate::handlers::{auth, bookings, doctors, health, path_not_found, queue};
use crate::state::{BookingState, QueueState};

/// Doctors, timeslots, bookings and login under `/api`, with the front-end
/// tree served for everything else.
pub fn booking_router(state: Arc<BookingState>, static_dir: &str) -> Router {
    // Wrong methods on known paths answer like unknown paths.
    let api = Router::new()
        .route("/login", post(auth::login).fallback(path_not_found))
        .route(
            "/doctors",
            get(doctors::list_doctors)
                .post(doctors::create_doctor)
                .fallback(path_not_found),
        )
        .route(
            "/doctors/:id/timeslots",
            post(doctors::add_timeslots).fallback(path_not_found),
        )
        .route(
            "/doctors/:id/available",
            get(doctors::available_slots).fallback(path_not_found),
        )
        .route("/bookings", post(bookings::book).fallback(path_not_found))
        .route(
            "/appointments",
            get(bookings::list_appointments).fallback(path_not_found),
        )
        .fallback(path_not_found);

    // `/api/` itself misses the nested router, so the front end guards it too.
    let front = FrontEnd::new(static_dir)
        .with_api_prefix("/api/")
        .with_landing_page("/login.html");

    Router::new()
        .route("/health", get(health::health))
        .nest("/api", api)
        .fallback(move |req: Request| front.clone().serve(req))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub fn queue_router(state: Arc<QueueState>, static_dir: &str) -> Router {
    let front = FrontEnd::new(static_dir);

    Router::new()
        .route("/register", post(queue::register))
        .route("/queue", get(queue::list_queue))
        .route("/health", get(health::health))
        .fallback(move |req: Request| front.clone().serve(req))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
