//! The department agents pipeline and the close-chat flow.
//!
//! credentials -> agents -> status -> presenter, strictly in sequence. Any
//! failing call aborts the pipeline, except the cosmetic department name
//! lookup. Nothing is cached between runs.

pub mod agents;
pub mod credentials;
pub mod presenter;
pub mod status;

use tracing::{info, warn};

use crate::Result;
use crate::client::ChatClient;
use crate::config::ApplicationSettings;
use crate::models::{AgentStatusLine, Department, View};

use self::status::StatusAggregator;

pub const CLOSE_COMMENT: &str = "closed by button";

/// Result of one pipeline run, ready for presentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentReport {
    pub department_id: String,
    pub department_name: String,
    pub lines: Vec<AgentStatusLine>,
}

impl AgentReport {
    pub fn title(&self) -> String {
        format!("{}{}", presenter::TITLE_PREFIX, self.department_name)
    }

    pub fn into_view(self, room_id: Option<&str>) -> View {
        presenter::present(&self.department_name, &self.lines, room_id)
    }
}

/// Fetch the configured department's agents with their presence status.
///
/// Settings are validated before the first network call.
pub async fn department_report(client: &ChatClient, settings: &ApplicationSettings) -> Result<AgentReport> {
    let department_id = settings.department_id()?;
    let credential = settings.credential()?;

    let headers = credentials::resolve(client, &credential).await?;
    let usernames = agents::list(client, &headers, department_id).await?;
    let lines = StatusAggregator::new(settings.status_failure)
        .aggregate(client, &headers, &usernames)
        .await?;

    let department_name = match client.department(&headers, department_id).await {
        Ok(department) => department
            .map(|department| department.name)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| department_id.to_string()),
        Err(e) => {
            warn!(department = %department_id, error = %e, "department lookup failed, showing id");
            department_id.to_string()
        }
    };

    Ok(AgentReport {
        department_id: department_id.to_string(),
        department_name,
        lines,
    })
}

/// Notify the room that it is about to be closed, then close it.
///
/// Headers are resolved again here; the agents modal's headers are long gone.
pub async fn close_conversation(client: &ChatClient, settings: &ApplicationSettings, room_id: &str) -> Result<()> {
    let credential = settings.credential()?;
    let headers = credentials::resolve(client, &credential).await?;

    let notice = format!("The room {} is about to be closed.", room_id);
    client.send_message(&headers, room_id, &notice).await?;
    client.close_room(&headers, room_id, CLOSE_COMMENT).await?;

    info!(room_id = %room_id, "room closed");
    Ok(())
}

/// Departments worth offering in the department selector
pub async fn selectable_departments(
    client: &ChatClient,
    settings: &ApplicationSettings,
) -> Result<Vec<Department>> {
    let credential = settings.credential()?;
    let headers = credentials::resolve(client, &credential).await?;

    Ok(client
        .departments(&headers)
        .await?
        .into_iter()
        .filter(|department| department.is_selectable())
        .collect())
}
