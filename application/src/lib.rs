//! Application layer for modsync
//!
//! This crate contains the port definitions, the explicit component container
//! and the use cases that synchronize modules before a test suite runs.
//! It depends only on the domain layer.

pub mod container;
pub mod context;
pub mod guard;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use container::{Container, RegisteredLoader};
pub use context::TestContext;
pub use guard::{SyncGuard, SyncPermit};
pub use ports::{
    client_provider::{ClientError, ClientProviderPort, ServiceClient},
    event_publisher::{EventPublisher, NoEventPublisher},
    loader_factory::LoaderFactory,
    modules_loader::{LoadError, ModulesLoaderPort},
};
pub use use_cases::resolve_loader::{LoaderResolver, ResolveError};
pub use use_cases::sync_modules::{ModulesSyncCoordinator, SyncError, SyncOutcome};
