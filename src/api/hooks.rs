use axum::Json;
use serde::Serialize;

use crate::interaction::hooks;
use crate::models::{ChatMessage, RelayMessage};

#[derive(Debug, Serialize)]
pub struct PreventResponse {
    pub prevent: bool,
}

/// POST /api/hooks/pre-message - Decide whether a message may be sent
pub async fn pre_message(Json(message): Json<ChatMessage>) -> Json<PreventResponse> {
    Json(PreventResponse {
        prevent: hooks::prevents(&message),
    })
}

#[derive(Debug, Serialize)]
pub struct RelayResponse {
    pub relay: Option<RelayMessage>,
}

/// POST /api/hooks/post-message - Message to relay after one was sent
pub async fn post_message(Json(message): Json<ChatMessage>) -> Json<RelayResponse> {
    Json(RelayResponse {
        relay: hooks::relay(&message),
    })
}
