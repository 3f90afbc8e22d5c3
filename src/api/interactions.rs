use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use crate::api::AppState;
use crate::api::error::ApiError;
use crate::models::{CommandOutcome, CommandRequest, InteractionEvent, InteractionResponse};
use crate::pipeline;

// ============================================================================
// Interactions
// ============================================================================

/// POST /api/interactions - Button clicks, block actions and view events
pub async fn handle_interaction(
    State(state): State<AppState>,
    Json(event): Json<InteractionEvent>,
) -> Json<InteractionResponse> {
    Json(state.app.dispatch(event).await)
}

// ============================================================================
// Slash commands
// ============================================================================

/// POST /api/commands/:command - Run a slash command
pub async fn run_command(
    State(state): State<AppState>,
    Path(command): Path<String>,
    Json(request): Json<CommandRequest>,
) -> Json<CommandOutcome> {
    Json(state.app.command(&command, &request).await)
}

// ============================================================================
// Agents report
// ============================================================================

#[derive(Debug, Serialize)]
pub struct AgentsResponse {
    pub department_id: String,
    pub department_name: String,
    pub title: String,
    pub lines: Vec<String>,
}

/// GET /api/agents - The configured department's agents as plain JSON
pub async fn get_agents(State(state): State<AppState>) -> Result<Json<AgentsResponse>, ApiError> {
    let report = pipeline::department_report(state.app.client(), state.app.settings()).await?;

    Ok(Json(AgentsResponse {
        title: report.title(),
        lines: report.lines.iter().map(ToString::to_string).collect(),
        department_id: report.department_id,
        department_name: report.department_name,
    }))
}
