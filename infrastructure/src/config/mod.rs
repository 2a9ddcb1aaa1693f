//! Configuration file loading for modsync
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `MODSYNC_*` environment variables
//! 2. Explicitly passed config file
//! 3. Project root: `./modsync.toml` or `./.modsync.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/modsync/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, DEFAULT_MODULE_PREFIX, FileClientConfig, FileConfig, FileEventsConfig,
    FileLoggingConfig, FileResolverConfig, Severity,
};
pub use loader::ConfigLoader;
