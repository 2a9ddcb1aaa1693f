//! modsync - load server-side modules before integration tests run
//!
//! This crate wires the domain, application and infrastructure layers into a
//! [`Harness`] that test suites call before their first test. The first suite
//! that declares module directories triggers a single load for the whole
//! process; every later suite is a no-op.
//!
//! ```ignore
//! use modsync::{Harness, TestSuite};
//!
//! let harness = Harness::load(None)?;
//! let suite = TestSuite::new("UserApiTest")
//!     .with_directive_group(["src/main/ml-modules", "src/test/ml-modules"]);
//! harness.before_test_class(&suite).await?;
//! ```

mod harness;
mod logging;

pub use harness::{Harness, HarnessBuilder};
pub use logging::init_tracing;

// Re-export the types test code needs
pub use modsync_application::{
    ClientError, ClientProviderPort, LoadError, ModulesLoaderPort, ServiceClient, SyncGuard,
    SyncOutcome,
};
pub use modsync_domain::{
    AmbiguousLoaderPolicy, DirectiveGroup, LoadedModules, ModulesDirective, ModulesLoadedEvent,
    TestSuite,
};
pub use modsync_infrastructure::FileConfig;
