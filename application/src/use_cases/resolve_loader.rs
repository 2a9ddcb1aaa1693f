//! Loader resolution
//!
//! Picks the loader a sync run will use. A single registered loader is always
//! preferred; otherwise a default loader is built from the client provider.
//! What happens with several registered loaders is governed by
//! [`AmbiguousLoaderPolicy`].

use crate::container::Container;
use crate::ports::client_provider::ClientError;
use crate::ports::modules_loader::ModulesLoaderPort;
use modsync_domain::AmbiguousLoaderPolicy;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while resolving a loader
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Several loaders are registered and none could be chosen.
    #[error("Ambiguous loader configuration: {} registered ({})", .candidates.len(), .candidates.join(", "))]
    Ambiguous { candidates: Vec<String> },

    /// No loader is registered and there is no client provider to build one.
    #[error("No modules loader registered and no client provider to build one")]
    Missing,

    /// The client provider could not hand out a client.
    #[error("Client provider failed: {0}")]
    Client(#[from] ClientError),
}

/// Resolves the loader for a test context.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoaderResolver {
    policy: AmbiguousLoaderPolicy,
}

impl LoaderResolver {
    pub fn new(policy: AmbiguousLoaderPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> AmbiguousLoaderPolicy {
        self.policy
    }

    /// Returns the loader to use for this container.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::Ambiguous`] - several loaders and either the policy is
    ///   `reject` or there is no client provider to fall back on
    /// - [`ResolveError::Missing`] - no loader and no client provider
    /// - [`ResolveError::Client`] - the client provider failed
    pub fn resolve(&self, container: &Container) -> Result<Arc<dyn ModulesLoaderPort>, ResolveError> {
        let loaders = container.loaders();

        match loaders {
            [only] => {
                info!(
                    "Found modules loader with name {}, will use that for loading modules",
                    only.name
                );
                Ok(Arc::clone(&only.loader))
            }
            [] => self.build_default(container, None),
            _ => {
                let candidates = container.loader_names();
                match self.policy {
                    AmbiguousLoaderPolicy::Reject => Err(ResolveError::Ambiguous { candidates }),
                    AmbiguousLoaderPolicy::Fallback => {
                        warn!(
                            "Found {} modules loaders ({}), ignoring them and building a default loader",
                            candidates.len(),
                            candidates.join(", ")
                        );
                        self.build_default(container, Some(candidates))
                    }
                }
            }
        }
    }

    fn build_default(
        &self,
        container: &Container,
        ambiguous: Option<Vec<String>>,
    ) -> Result<Arc<dyn ModulesLoaderPort>, ResolveError> {
        let Some(provider) = container.client_provider() else {
            return Err(match ambiguous {
                Some(candidates) => ResolveError::Ambiguous { candidates },
                None => ResolveError::Missing,
            });
        };

        let client = provider.client()?;
        info!("Building default modules loader for {}", client.endpoint());
        Ok(container.loader_factory().build(client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::client_provider::{ClientProviderPort, ServiceClient};
    use crate::ports::event_publisher::NoEventPublisher;
    use crate::ports::loader_factory::LoaderFactory;
    use crate::ports::modules_loader::LoadError;
    use async_trait::async_trait;
    use modsync_domain::LoadedModules;
    use std::path::Path;
    use std::sync::Mutex;

    // === Mock implementations ===

    struct MockLoader;

    #[async_trait]
    impl ModulesLoaderPort for MockLoader {
        async fn load_modules(&self, _base_dir: &Path) -> Result<Option<LoadedModules>, LoadError> {
            Ok(None)
        }
    }

    struct MockClient(String);

    #[async_trait]
    impl ServiceClient for MockClient {
        fn endpoint(&self) -> &str {
            &self.0
        }

        async fn put_module(&self, _uri: &str, _content: Vec<u8>) -> Result<(), ClientError> {
            Ok(())
        }
    }

    struct MockProvider {
        result: Result<String, ClientError>,
    }

    impl ClientProviderPort for MockProvider {
        fn client(&self) -> Result<Arc<dyn ServiceClient>, ClientError> {
            self.result
                .clone()
                .map(|endpoint| Arc::new(MockClient(endpoint)) as Arc<dyn ServiceClient>)
        }
    }

    /// Records the endpoint of every client it wraps and hands back a known loader.
    struct MockFactory {
        built: Mutex<Vec<String>>,
        loader: Arc<dyn ModulesLoaderPort>,
    }

    impl MockFactory {
        fn new() -> Self {
            Self {
                built: Mutex::new(Vec::new()),
                loader: Arc::new(MockLoader),
            }
        }
    }

    impl LoaderFactory for MockFactory {
        fn build(&self, client: Arc<dyn ServiceClient>) -> Arc<dyn ModulesLoaderPort> {
            self.built.lock().unwrap().push(client.endpoint().to_string());
            Arc::clone(&self.loader)
        }
    }

    fn provider(endpoint: &str) -> Arc<dyn ClientProviderPort> {
        Arc::new(MockProvider {
            result: Ok(endpoint.to_string()),
        })
    }

    fn same(a: &Arc<dyn ModulesLoaderPort>, b: &Arc<dyn ModulesLoaderPort>) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
    }

    // ==================== Single registered loader ====================

    #[test]
    fn test_single_registered_loader_is_preferred() {
        let factory = Arc::new(MockFactory::new());
        let registered: Arc<dyn ModulesLoaderPort> = Arc::new(MockLoader);
        let container = Container::new(Arc::new(NoEventPublisher), factory.clone())
            .with_client_provider(provider("http://db:8040"))
            .register_loader("primary", Arc::clone(&registered));

        let resolved = LoaderResolver::default().resolve(&container).unwrap();

        assert!(same(&resolved, &registered));
        assert!(factory.built.lock().unwrap().is_empty());
    }

    // ==================== Fallback construction ====================

    #[test]
    fn test_no_loader_builds_default_from_provider() {
        let factory = Arc::new(MockFactory::new());
        let container = Container::new(Arc::new(NoEventPublisher), factory.clone())
            .with_client_provider(provider("http://db:8040"));

        let resolved = LoaderResolver::default().resolve(&container).unwrap();

        assert!(same(&resolved, &factory.loader));
        assert_eq!(*factory.built.lock().unwrap(), vec!["http://db:8040"]);
    }

    #[test]
    fn test_no_loader_and_no_provider_is_missing() {
        let container = Container::new(Arc::new(NoEventPublisher), Arc::new(MockFactory::new()));
        let err = LoaderResolver::default().resolve(&container).err().unwrap();
        assert_eq!(err, ResolveError::Missing);
    }

    #[test]
    fn test_provider_failure_propagates() {
        let container = Container::new(Arc::new(NoEventPublisher), Arc::new(MockFactory::new()))
            .with_client_provider(Arc::new(MockProvider {
                result: Err(ClientError::NotConfigured("no url".to_string())),
            }));

        let err = LoaderResolver::default().resolve(&container).err().unwrap();
        assert_eq!(
            err,
            ResolveError::Client(ClientError::NotConfigured("no url".to_string()))
        );
    }

    // ==================== Several registered loaders ====================

    fn two_loaders(factory: Arc<MockFactory>) -> Container {
        Container::new(Arc::new(NoEventPublisher), factory)
            .register_loader("first", Arc::new(MockLoader))
            .register_loader("second", Arc::new(MockLoader))
    }

    #[test]
    fn test_fallback_policy_builds_default_when_ambiguous() {
        let factory = Arc::new(MockFactory::new());
        let container = two_loaders(factory.clone()).with_client_provider(provider("http://db"));

        let resolver = LoaderResolver::new(AmbiguousLoaderPolicy::Fallback);
        let resolved = resolver.resolve(&container).unwrap();

        assert!(same(&resolved, &factory.loader));
        assert_eq!(factory.built.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_fallback_policy_without_provider_is_ambiguous() {
        let container = two_loaders(Arc::new(MockFactory::new()));

        let err = LoaderResolver::new(AmbiguousLoaderPolicy::Fallback)
            .resolve(&container)
            .err()
            .unwrap();

        assert_eq!(
            err,
            ResolveError::Ambiguous {
                candidates: vec!["first".to_string(), "second".to_string()]
            }
        );
    }

    #[test]
    fn test_reject_policy_fails_even_with_provider() {
        let factory = Arc::new(MockFactory::new());
        let container = two_loaders(factory.clone()).with_client_provider(provider("http://db"));

        let err = LoaderResolver::new(AmbiguousLoaderPolicy::Reject)
            .resolve(&container)
            .err()
            .unwrap();

        assert!(matches!(err, ResolveError::Ambiguous { .. }));
        assert!(factory.built.lock().unwrap().is_empty());
    }

    #[test]
    fn test_ambiguous_error_message_lists_candidates() {
        let err = ResolveError::Ambiguous {
            candidates: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Ambiguous loader configuration: 2 registered (a, b)"
        );
    }
}
