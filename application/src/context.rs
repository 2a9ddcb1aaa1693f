//! Test execution context handed to the coordinator

use crate::container::Container;
use modsync_domain::TestSuite;
use std::sync::Arc;

/// The suite about to run and the container active for it.
#[derive(Clone)]
pub struct TestContext {
    suite: TestSuite,
    container: Arc<Container>,
}

impl TestContext {
    pub fn new(suite: TestSuite, container: Arc<Container>) -> Self {
        Self { suite, container }
    }

    pub fn suite(&self) -> &TestSuite {
        &self.suite
    }

    pub fn container(&self) -> &Container {
        &self.container
    }
}
