//! Port for announcing loaded modules.
//!
//! Publishing is synchronous and non-fallible: fan-out is the publisher's
//! concern, and a missing audience must not fail a test run.

use modsync_domain::ModulesLoadedEvent;

/// Port for publishing [`ModulesLoadedEvent`]s.
pub trait EventPublisher: Send + Sync {
    fn publish(&self, event: ModulesLoadedEvent);
}

/// No-op implementation for tests and when nobody listens.
pub struct NoEventPublisher;

impl EventPublisher for NoEventPublisher {
    fn publish(&self, _event: ModulesLoadedEvent) {}
}
