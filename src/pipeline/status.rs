use tracing::warn;

use crate::Result;
use crate::client::ChatClient;
use crate::config::StatusFailurePolicy;
use crate::models::{Agent, AgentStatusLine, AuthHeaders, UNKNOWN_STATUS};

/// Looks up each agent's presence, one call at a time
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusAggregator {
    policy: StatusFailurePolicy,
}

impl StatusAggregator {
    pub fn new(policy: StatusFailurePolicy) -> Self {
        Self { policy }
    }

    /// One line per username, in input order
    pub async fn aggregate(
        &self,
        client: &ChatClient,
        headers: &AuthHeaders,
        usernames: &[String],
    ) -> Result<Vec<AgentStatusLine>> {
        let mut lines = Vec::with_capacity(usernames.len());

        for username in usernames {
            let status = match client.user_status(headers, username).await {
                Ok(status) => status,
                Err(e) => match self.policy {
                    StatusFailurePolicy::FailFast => return Err(e),
                    StatusFailurePolicy::Placeholder => {
                        warn!(username = %username, error = %e, "status lookup failed, using placeholder");
                        UNKNOWN_STATUS.to_string()
                    }
                },
            };
            lines.push(Agent::new(username.as_str(), status).status_line());
        }

        Ok(lines)
    }
}
