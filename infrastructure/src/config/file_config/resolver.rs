//! Resolver configuration from TOML (`[resolver]` section)

use modsync_domain::AmbiguousLoaderPolicy;
use serde::{Deserialize, Serialize};

/// Raw resolver configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileResolverConfig {
    /// What to do when more than one loader is registered
    pub ambiguous_loaders: AmbiguousLoaderPolicy,
}
