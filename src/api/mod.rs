pub mod echo;
pub mod error;
pub mod hooks;
pub mod interactions;
pub mod manifest;

use std::sync::Arc;

use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router, middleware};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::App;
use crate::auth::host_auth_middleware;

// ============================================================================
// Application state
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub app: Arc<App>,
}

impl AppState {
    pub fn new(app: App) -> Self {
        Self { app: Arc::new(app) }
    }
}

// ============================================================================
// Health check handler
// ============================================================================

async fn health_check() -> Response {
    Json(json!({"status": "ok"})).into_response()
}

// ============================================================================
// Router
// ============================================================================

pub fn router(state: AppState) -> Router {
    let host_routes = Router::new()
        // App registration
        .route("/api/app", get(manifest::get_manifest))
        // Interaction events
        .route("/api/interactions", post(interactions::handle_interaction))
        // Slash commands
        .route("/api/commands/:command", post(interactions::run_command))
        // Message hooks
        .route("/api/hooks/pre-message", post(hooks::pre_message))
        .route("/api/hooks/post-message", post(hooks::post_message))
        // Agents report
        .route("/api/agents", get(interactions::get_agents))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            host_auth_middleware,
        ));

    Router::new()
        // Health check
        .route("/api", get(health_check))
        // Public echo endpoint
        .route("/api/echo", get(echo::echo).post(echo::echo))
        .merge(host_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
