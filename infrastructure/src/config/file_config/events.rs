//! Event bus configuration from TOML (`[events]` section)

use serde::{Deserialize, Serialize};

/// Raw event bus configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEventsConfig {
    /// Broadcast channel capacity (events buffered per subscriber)
    pub capacity: usize,
}

impl Default for FileEventsConfig {
    fn default() -> Self {
        Self { capacity: 1024 }
    }
}
