use tracing::info;

use crate::Result;
use crate::client::ChatClient;
use crate::models::AuthHeaders;

/// Usernames of the department's agents, in the order the server returned
/// them. Duplicates are kept; an empty department yields an empty list.
pub async fn list(client: &ChatClient, headers: &AuthHeaders, department_id: &str) -> Result<Vec<String>> {
    let agents = client.department_agents(headers, department_id).await?;
    info!(department = %department_id, agents = agents.len(), "fetched department agents");
    Ok(agents)
}
