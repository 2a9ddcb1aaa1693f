//! Client Provider port
//!
//! Defines how the application obtains a connection to the backend service.
//! Only used when no loader instance is registered and a default loader has
//! to be built around a fresh client.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised by the backend service client
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("Client not configured: {0}")]
    NotConfigured(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Service rejected {uri} with status {status}")]
    Rejected { uri: String, status: u16 },

    #[error("Request timeout")]
    Timeout,
}

/// A connection handle to the backend service.
#[async_trait]
pub trait ServiceClient: Send + Sync {
    /// Base endpoint this client talks to, for log messages
    fn endpoint(&self) -> &str;

    /// Store one module under `uri`, replacing any previous content.
    async fn put_module(&self, uri: &str, content: Vec<u8>) -> Result<(), ClientError>;
}

/// Port for producing service clients
pub trait ClientProviderPort: Send + Sync {
    fn client(&self) -> Result<Arc<dyn ServiceClient>, ClientError>;
}
