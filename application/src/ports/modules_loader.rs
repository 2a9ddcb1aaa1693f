//! Modules Loader port
//!
//! Defines the interface for synchronizing the modules found under a base
//! directory into the backend service. How files are diffed, uploaded or
//! removed is entirely up to the implementation.

use super::client_provider::ClientError;
use async_trait::async_trait;
use modsync_domain::LoadedModules;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading modules
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Modules directory does not exist: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    #[error("Load failed: {0}")]
    Other(String),
}

/// Port for module loading
///
/// This port defines how the coordinator hands a directory to a loader.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ModulesLoaderPort: Send + Sync {
    /// Synchronize the modules under `base_dir`.
    ///
    /// Returns the files acted on, or `None` when the loader has nothing to
    /// report. Both `None` and an empty set mean "no event".
    async fn load_modules(&self, base_dir: &Path) -> Result<Option<LoadedModules>, LoadError>;
}
