//! Client configuration from TOML (`[client]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// URI prefix under which modules are stored when none is configured
pub const DEFAULT_MODULE_PREFIX: &str = "/ext";

/// Raw client configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileClientConfig {
    /// Base URL of the backend service; no client provider is registered without it
    pub url: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// URI prefix prepended to every uploaded module path
    pub module_prefix: String,
}

impl Default for FileClientConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_secs: 30,
            module_prefix: DEFAULT_MODULE_PREFIX.to_string(),
        }
    }
}

impl FileClientConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
