use crate::config::default_auto_close_ms;

use serde::{Deserialize, Serialize};

/// Workflow behaviour settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehaviourConfig {
    /// Delay between a successful registration and automatic close.
    #[serde(default = "default_auto_close_ms")]
    pub auto_close_ms: u64,
}

impl Default for BehaviourConfig {
    fn default() -> Self {
        Self {
            auto_close_ms: default_auto_close_ms(),
        }
    }
}
