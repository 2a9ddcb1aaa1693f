//! Infrastructure layer for modsync
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod client;
pub mod config;
pub mod events;
pub mod loader;

// Re-export commonly used types
pub use client::{HttpClientProvider, HttpServiceClient};
pub use config::{
    ConfigIssue, ConfigLoader, FileClientConfig, FileConfig, FileEventsConfig, FileLoggingConfig,
    FileResolverConfig, Severity,
};
pub use events::BroadcastEventBus;
pub use loader::{DirectoryLoaderFactory, DirectoryModulesLoader};
