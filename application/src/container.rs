//! Explicit component container
//!
//! The [`Container`] holds every collaborator the coordinator may need. It is
//! filled once at harness setup; nothing is discovered at runtime.

use crate::ports::client_provider::ClientProviderPort;
use crate::ports::event_publisher::EventPublisher;
use crate::ports::loader_factory::LoaderFactory;
use crate::ports::modules_loader::ModulesLoaderPort;
use std::sync::Arc;

/// A loader registered under a name.
#[derive(Clone)]
pub struct RegisteredLoader {
    pub name: String,
    pub loader: Arc<dyn ModulesLoaderPort>,
}

/// Components available to one test context.
///
/// # Examples
///
/// ```ignore
/// let container = Container::new(events, factory)
///     .with_client_provider(provider)
///     .register_loader("primary", loader);
/// ```
#[derive(Clone)]
pub struct Container {
    loaders: Vec<RegisteredLoader>,
    client_provider: Option<Arc<dyn ClientProviderPort>>,
    loader_factory: Arc<dyn LoaderFactory>,
    events: Arc<dyn EventPublisher>,
}

impl Container {
    pub fn new(events: Arc<dyn EventPublisher>, loader_factory: Arc<dyn LoaderFactory>) -> Self {
        Self {
            loaders: Vec::new(),
            client_provider: None,
            loader_factory,
            events,
        }
    }

    /// Registers a loader. A later registration under the same name replaces
    /// the earlier one.
    pub fn register_loader(
        mut self,
        name: impl Into<String>,
        loader: Arc<dyn ModulesLoaderPort>,
    ) -> Self {
        let name = name.into();
        match self.loaders.iter_mut().find(|r| r.name == name) {
            Some(existing) => existing.loader = loader,
            None => self.loaders.push(RegisteredLoader { name, loader }),
        }
        self
    }

    pub fn with_client_provider(mut self, provider: Arc<dyn ClientProviderPort>) -> Self {
        self.client_provider = Some(provider);
        self
    }

    pub fn loaders(&self) -> &[RegisteredLoader] {
        &self.loaders
    }

    pub fn loader_names(&self) -> Vec<String> {
        self.loaders.iter().map(|r| r.name.clone()).collect()
    }

    pub fn client_provider(&self) -> Option<&Arc<dyn ClientProviderPort>> {
        self.client_provider.as_ref()
    }

    pub fn loader_factory(&self) -> &Arc<dyn LoaderFactory> {
        &self.loader_factory
    }

    pub fn events(&self) -> &Arc<dyn EventPublisher> {
        &self.events
    }
}
