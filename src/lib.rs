pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod interaction;
pub mod models;
pub mod pipeline;

use thiserror::Error;

// ============================================================================
// Error types
// ============================================================================

#[derive(Error, Debug)]
pub enum LivechatError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Upstream error: {0}")]
    Upstream(String),
}

pub type Result<T> = std::result::Result<T, LivechatError>;

impl LivechatError {
    pub fn to_status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            LivechatError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            LivechatError::Authentication(_) => StatusCode::BAD_GATEWAY,
            LivechatError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

pub use config::Settings;
pub use interaction::App;
