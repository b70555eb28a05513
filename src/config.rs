use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub queue_port: u16,
    pub booking_static_dir: String,
    pub queue_static_dir: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            queue_port: env::var("QUEUE_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3001),
            booking_static_dir: env::var("BOOKING_STATIC_DIR")
                .unwrap_or_else(|_| "public".to_string()),
            queue_static_dir: env::var("QUEUE_STATIC_DIR")
                .unwrap_or_else(|_| "queue-public".to_string()),
        }
    }
}
