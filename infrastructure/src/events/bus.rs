//! Event Bus - broadcast delivery of modules-loaded events
//!
//! The bus uses a tokio broadcast channel: every subscriber receives every
//! event published after it subscribed. Publishing never blocks and never
//! fails; with no subscribers the event is simply dropped.

use modsync_application::EventPublisher;
use modsync_domain::ModulesLoadedEvent;
use tokio::sync::broadcast;
use tracing::debug;

/// Default channel capacity (events)
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1024;

/// Broadcast implementation of [`EventPublisher`].
pub struct BroadcastEventBus {
    tx: broadcast::Sender<ModulesLoadedEvent>,
}

impl BroadcastEventBus {
    /// Create a new event bus with the given capacity (at least 1)
    pub fn new(capacity: usize) -> Self {
        debug!(capacity, "BroadcastEventBus::new: creating event bus");
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Create a new event bus with default capacity
    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Subscribe to receive events
    ///
    /// Events published before subscription are not received.
    pub fn subscribe(&self) -> broadcast::Receiver<ModulesLoadedEvent> {
        self.tx.subscribe()
    }

    /// Get the number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for BroadcastEventBus {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

impl EventPublisher for BroadcastEventBus {
    fn publish(&self, event: ModulesLoadedEvent) {
        debug!(files = event.files().len(), "BroadcastEventBus::publish");
        // No subscribers is fine
        let _ = self.tx.send(event);
    }
}
