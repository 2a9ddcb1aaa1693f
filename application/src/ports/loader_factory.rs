//! Loader Factory port
//!
//! Builds the default loader around a service client. The resolver falls back
//! to this when the container holds no single registered loader.

use super::client_provider::ServiceClient;
use super::modules_loader::ModulesLoaderPort;
use std::sync::Arc;

pub trait LoaderFactory: Send + Sync {
    fn build(&self, client: Arc<dyn ServiceClient>) -> Arc<dyn ModulesLoaderPort>;
}
