use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use clinic_desk::config::AppConfig;
use clinic_desk::models::{ProcedureTable, User};
use clinic_desk::routes;
use clinic_desk::state::{BookingState, QueueState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let booking_state = Arc::new(BookingState::new(User::seeded()));
    let queue_state = Arc::new(QueueState::new(ProcedureTable::standard()));

    let booking_app = routes::booking_router(booking_state, &config.booking_static_dir);
    let queue_app = routes::queue_router(queue_state, &config.queue_static_dir);

    let booking_addr = format!("0.0.0.0:{}", config.port);
    let queue_addr = format!("0.0.0.0:{}", config.queue_port);

    let booking_listener = tokio::net::TcpListener::bind(&booking_addr).await?;
    tracing::info!("appointment server running on http://{booking_addr}");

    let queue_listener = tokio::net::TcpListener::bind(&queue_addr).await?;
    tracing::info!("queue server running on http://{queue_addr}");

    tokio::try_join!(
        async { axum::serve(booking_listener, booking_app).await },
        async { axum::serve(queue_listener, queue_app).await },
    )?;

    Ok(())
}
