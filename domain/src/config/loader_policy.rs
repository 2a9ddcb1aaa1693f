//! Ambiguous loader policy value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// What the loader resolver does when more than one loader is registered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmbiguousLoaderPolicy {
    /// Ignore the registered loaders and build a default one from the
    /// client provider, as if none were registered (default)
    #[default]
    Fallback,
    /// Fail resolution immediately
    Reject,
}

impl AmbiguousLoaderPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fallback => "fallback",
            Self::Reject => "reject",
        }
    }
}

impl fmt::Display for AmbiguousLoaderPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown ambiguous loader policy '{0}' (expected 'fallback' or 'reject')")]
pub struct ParsePolicyError(pub String);

impl FromStr for AmbiguousLoaderPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fallback" => Ok(Self::Fallback),
            "reject" => Ok(Self::Reject),
            other => Err(ParsePolicyError(other.to_string())),
        }
    }
}
