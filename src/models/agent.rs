use std::fmt;

use serde::{Deserialize, Serialize};

/// Status shown when an agent's presence could not be fetched
pub const UNKNOWN_STATUS: &str = "unknown";

// ============================================================================
// Agent
// ============================================================================

/// A livechat agent with the presence status reported at call time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub username: String,
    pub status: String,
}

impl Agent {
    pub fn new(username: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            status: status.into(),
        }
    }

    pub fn status_line(&self) -> AgentStatusLine {
        AgentStatusLine::from(self)
    }
}

// ============================================================================
// Agent Status Line
// ============================================================================

/// Display row in the form `username (status)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentStatusLine(String);

impl AgentStatusLine {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&Agent> for AgentStatusLine {
    fn from(agent: &Agent) -> Self {
        Self(format!("{} ({})", agent.username, agent.status))
    }
}

impl fmt::Display for AgentStatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_line_format() {
        assert_eq!(Agent::new("alice", "online").status_line().as_str(), "alice (online)");
        assert_eq!(
            Agent::new("bob", UNKNOWN_STATUS).status_line().to_string(),
            "bob (unknown)"
        );
    }
}
