//! Synchronize modules before a test suite
//!
//! This module provides the [`ModulesSyncCoordinator`], the lifecycle hook
//! that makes sure server-side modules are loaded before the first suite
//! that asks for them runs.
//!
//! # Overview
//!
//! On every `before_test_class` callback the coordinator:
//!
//! 1. **Checks the guard** - once a load sequence succeeded, nothing happens
//! 2. **Discovers directives** - suites without directives are left alone
//! 3. **Resolves a loader** - one loader shared by every directive
//! 4. **Loads each directory** - strictly in declaration order
//! 5. **Publishes events** - one [`ModulesLoadedEvent`] per non-empty result
//! 6. **Completes the guard** - only after every directive succeeded
//!
//! Any failure propagates unchanged and leaves the guard unset, so a later
//! suite repeats the whole sequence. Directories loaded before the failure
//! are loaded, and announced, again on that retry.

use crate::context::TestContext;
use crate::guard::SyncGuard;
use crate::ports::modules_loader::LoadError;
use crate::use_cases::resolve_loader::{LoaderResolver, ResolveError};
use modsync_domain::{ModulesLoadedEvent, discover};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that abort a sync run.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Loader resolution failed: {0}")]
    Resolve(#[from] ResolveError),

    #[error("Failed to load modules from {}: {source}", .base_dir.display())]
    Load {
        base_dir: PathBuf,
        #[source]
        source: LoadError,
    },
}

/// What a `before_test_class` callback did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// A previous callback already completed the load sequence.
    AlreadySynchronized,
    /// The suite carries no directives; the guard is untouched.
    NoDirectives,
    /// Every directive was loaded and the guard is now set.
    Synchronized {
        /// Number of directories handed to the loader
        directories: usize,
        /// Number of events published
        events: usize,
    },
}

/// Lifecycle hook that loads modules once per guard.
///
/// # Examples
///
/// ```ignore
/// use modsync_application::{ModulesSyncCoordinator, LoaderResolver, SyncGuard, TestContext};
///
/// let coordinator = ModulesSyncCoordinator::new(LoaderResolver::default(), SyncGuard::global());
/// coordinator.before_test_class(&TestContext::new(suite, container)).await?;
/// ```
pub struct ModulesSyncCoordinator {
    resolver: LoaderResolver,
    guard: Arc<SyncGuard>,
}

impl ModulesSyncCoordinator {
    pub fn new(resolver: LoaderResolver, guard: Arc<SyncGuard>) -> Self {
        Self { resolver, guard }
    }

    pub fn guard(&self) -> &Arc<SyncGuard> {
        &self.guard
    }

    /// Runs before the first test of a suite.
    ///
    /// # Errors
    ///
    /// - [`SyncError::Resolve`] - no loader could be resolved
    /// - [`SyncError::Load`] - the loader failed for a directory; remaining
    ///   directories are skipped
    pub async fn before_test_class(&self, context: &TestContext) -> Result<SyncOutcome, SyncError> {
        if self.guard.is_done() {
            debug!("Modules already synchronized, skipping suite {}", context.suite().name());
            return Ok(SyncOutcome::AlreadySynchronized);
        }

        let directives = discover(context.suite());
        if directives.is_empty() {
            debug!("Suite {} declares no modules directives", context.suite().name());
            return Ok(SyncOutcome::NoDirectives);
        }

        // Another caller may have finished while we waited for the permit.
        let Some(permit) = self.guard.acquire().await else {
            return Ok(SyncOutcome::AlreadySynchronized);
        };

        let container = context.container();
        let loader = self.resolver.resolve(container)?;

        let mut published = 0;
        for directive in &directives {
            let base_dir = directive.base_dir();
            info!("Loading modules, using base directory of {}", base_dir.display());

            let loaded = loader
                .load_modules(base_dir)
                .await
                .map_err(|source| SyncError::Load {
                    base_dir: base_dir.to_path_buf(),
                    source,
                })?;

            match loaded {
                Some(files) if !files.is_empty() => {
                    info!("Loaded {} modules from {}", files.len(), base_dir.display());
                    container.events().publish(ModulesLoadedEvent::new(files));
                    published += 1;
                }
                _ => debug!("No modules loaded from {}", base_dir.display()),
            }
        }

        permit.complete();

        Ok(SyncOutcome::Synchronized {
            directories: directives.len(),
            events: published,
        })
    }
}
