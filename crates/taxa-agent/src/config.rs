use serde::{Deserialize, Serialize};

/// Configuration for the agent envelope edge.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Action group reported in responses when the request names none.
    pub action_group: String,
    /// Envelope message version.
    pub message_version: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            action_group: "ProductCategoryManagement".to_string(),
            message_version: "1.0".to_string(),
        }
    }
}
