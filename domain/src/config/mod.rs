//! Configuration value objects for the domain layer
//!
//! These are domain concepts related to configuration that are
//! used across multiple layers.

mod loader_policy;

pub use loader_policy::{AmbiguousLoaderPolicy, ParsePolicyError};
