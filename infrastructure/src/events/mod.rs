//! Event delivery

mod bus;

pub use bus::{BroadcastEventBus, DEFAULT_CHANNEL_CAPACITY};
