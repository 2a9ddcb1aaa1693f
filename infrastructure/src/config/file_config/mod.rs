//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod client;
mod events;
mod logging;
mod resolver;

pub use client::{DEFAULT_MODULE_PREFIX, FileClientConfig};
pub use events::FileEventsConfig;
pub use logging::FileLoggingConfig;
pub use resolver::FileResolverConfig;

use modsync_domain::TestSuite;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// A detected issue in the configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub message: String,
}

impl ConfigIssue {
    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Backend service client settings
    pub client: FileClientConfig,
    /// Loader resolution settings
    pub resolver: FileResolverConfig,
    /// Event bus settings
    pub events: FileEventsConfig,
    /// Logging settings
    pub logging: FileLoggingConfig,
    /// Suites declared in configuration (`[[suites]]`)
    pub suites: Vec<TestSuite>,
}

impl FileConfig {
    /// Look up a configuration-declared suite by name.
    pub fn suite(&self, name: &str) -> Option<&TestSuite> {
        self.suites.iter().find(|s| s.name == name)
    }

    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Client
        if let Some(url) = &self.client.url
            && !(url.starts_with("http://") || url.starts_with("https://"))
        {
            issues.push(ConfigIssue::error(format!(
                "client.url: '{}' is not an http(s) URL",
                url
            )));
        }
        if self.client.timeout_secs == 0 {
            issues.push(ConfigIssue::warning(
                "client.timeout_secs: 0 makes every request time out immediately",
            ));
        }

        // 2. Events
        if self.events.capacity == 0 {
            issues.push(ConfigIssue::error("events.capacity: must be at least 1"));
        }

        // 3. Suites
        let mut seen = HashSet::new();
        for suite in &self.suites {
            if suite.name.trim().is_empty() {
                issues.push(ConfigIssue::error("suites: suite name must not be empty"));
            } else if !seen.insert(suite.name.as_str()) {
                issues.push(ConfigIssue::error(format!(
                    "suites: duplicate suite name '{}'",
                    suite.name
                )));
            }

            let directives = suite
                .directive
                .iter()
                .chain(suite.directive_group.iter().flat_map(|g| g.iter()));
            for directive in directives {
                if directive.base_dir().as_os_str().is_empty() {
                    issues.push(ConfigIssue::error(format!(
                        "suites.{}: base_dir must not be empty",
                        suite.name
                    )));
                }
            }

            if suite.directive_group.as_ref().is_some_and(|g| g.is_empty()) {
                issues.push(ConfigIssue::warning(format!(
                    "suites.{}: empty directive_group, this suite never loads modules",
                    suite.name
                )));
            }
        }

        issues
    }
}
