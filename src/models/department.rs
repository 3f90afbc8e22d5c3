use serde::{Deserialize, Serialize};

/// A livechat department as offered in the department selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub num_agents: u32,
}

impl Department {
    /// Only enabled departments that have agents are worth selecting
    pub fn is_selectable(&self) -> bool {
        self.enabled && self.num_agents > 0
    }
}
