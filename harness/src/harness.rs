//! Harness wiring
//!
//! [`Harness`] turns a [`FileConfig`] into a ready coordinator: event bus,
//! container, client provider, default loader factory and run-once guard.

use crate::logging::init_tracing;
use anyhow::{Context, Result, bail};
use modsync_application::{
    ClientProviderPort, Container, LoaderResolver, ModulesLoaderPort, ModulesSyncCoordinator,
    SyncGuard, SyncOutcome, TestContext,
};
use modsync_domain::{ModulesLoadedEvent, TestSuite};
use modsync_infrastructure::{
    BroadcastEventBus, ConfigLoader, DirectoryLoaderFactory, FileConfig, HttpClientProvider,
    Severity,
};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{info, warn};

/// Builder for [`Harness`].
pub struct HarnessBuilder {
    config: FileConfig,
    guard: Option<Arc<SyncGuard>>,
    client_provider: Option<Arc<dyn ClientProviderPort>>,
    loaders: Vec<(String, Arc<dyn ModulesLoaderPort>)>,
}

impl HarnessBuilder {
    /// Use `guard` instead of the process-wide one.
    pub fn with_guard(mut self, guard: Arc<SyncGuard>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Use `provider` instead of the HTTP provider from `[client]`.
    pub fn with_client_provider(mut self, provider: Arc<dyn ClientProviderPort>) -> Self {
        self.client_provider = Some(provider);
        self
    }

    pub fn register_loader(
        mut self,
        name: impl Into<String>,
        loader: Arc<dyn ModulesLoaderPort>,
    ) -> Self {
        self.loaders.push((name.into(), loader));
        self
    }

    /// Validate the configuration and wire everything together.
    ///
    /// Fails if the configuration has any error-level issue; warnings are logged.
    pub fn build(self) -> Result<Harness> {
        let issues = self.config.validate();
        let errors: Vec<&str> = issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .map(|i| i.message.as_str())
            .collect();
        for issue in issues.iter().filter(|i| i.severity == Severity::Warning) {
            warn!("{}", issue.message);
        }
        if !errors.is_empty() {
            bail!("Invalid modsync configuration: {}", errors.join("; "));
        }

        let events = Arc::new(BroadcastEventBus::new(self.config.events.capacity));
        let factory = Arc::new(DirectoryLoaderFactory::new(
            self.config.client.module_prefix.clone(),
        ));

        let mut container = Container::new(events.clone(), factory);
        let provider = self.client_provider.or_else(|| {
            HttpClientProvider::from_config(&self.config.client)
                .map(|p| Arc::new(p) as Arc<dyn ClientProviderPort>)
        });
        if let Some(provider) = provider {
            container = container.with_client_provider(provider);
        }
        for (name, loader) in self.loaders {
            container = container.register_loader(name, loader);
        }

        let resolver = LoaderResolver::new(self.config.resolver.ambiguous_loaders);
        let guard = self.guard.unwrap_or_else(SyncGuard::global);

        info!(
            "modsync harness ready ({} suites configured, ambiguous loaders: {})",
            self.config.suites.len(),
            resolver.policy()
        );

        Ok(Harness {
            config: self.config,
            events,
            container: Arc::new(container),
            coordinator: ModulesSyncCoordinator::new(resolver, guard),
        })
    }
}

/// Entry point for test suites.
///
/// # Examples
///
/// ```ignore
/// let harness = modsync::Harness::load(None)?;
/// let suite = TestSuite::new("UserApiTest").with_directive("src/main/ml-modules");
/// harness.before_test_class(&suite).await?;
/// ```
pub struct Harness {
    config: FileConfig,
    events: Arc<BroadcastEventBus>,
    container: Arc<Container>,
    coordinator: ModulesSyncCoordinator,
}

impl Harness {
    pub fn builder(config: FileConfig) -> HarnessBuilder {
        HarnessBuilder {
            config,
            guard: None,
            client_provider: None,
            loaders: Vec::new(),
        }
    }

    /// Load configuration from the usual sources, install tracing and build
    /// a harness bound to the process-wide guard.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config = ConfigLoader::load(config_path)
            .map_err(|e| *e)
            .context("Failed to load modsync configuration")?;
        init_tracing(&config.logging.filter);
        Self::builder(config).build()
    }

    pub fn config(&self) -> &FileConfig {
        &self.config
    }

    pub fn container(&self) -> &Arc<Container> {
        &self.container
    }

    pub fn guard(&self) -> &Arc<SyncGuard> {
        self.coordinator.guard()
    }

    /// Receive every [`ModulesLoadedEvent`] published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<ModulesLoadedEvent> {
        self.events.subscribe()
    }

    /// Run before the first test of `suite`.
    pub async fn before_test_class(&self, suite: &TestSuite) -> Result<SyncOutcome> {
        let context = TestContext::new(suite.clone(), Arc::clone(&self.container));
        self.coordinator
            .before_test_class(&context)
            .await
            .with_context(|| format!("Failed to synchronize modules for suite {}", suite.name()))
    }

    /// Run before the first test of the suite declared as `name` in `[[suites]]`.
    pub async fn before_named_suite(&self, name: &str) -> Result<SyncOutcome> {
        let Some(suite) = self.config.suite(name) else {
            bail!("No suite named '{}' in modsync configuration", name);
        };
        self.before_test_class(suite).await
    }
}
