//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod client_provider;
pub mod event_publisher;
pub mod loader_factory;
pub mod modules_loader;
