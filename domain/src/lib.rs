//! Domain layer for modsync
//!
//! This crate contains the value types shared by every layer. It performs no
//! I/O and has no dependencies on infrastructure concerns.
//!
//! # Core Concepts
//!
//! - **Directive**: a base directory whose modules must be synchronized
//!   before a suite runs
//! - **Test suite**: a named descriptor carrying a single directive and/or an
//!   ordered directive group
//! - **Loaded modules**: the files a loader acted on for one directive
//! - **Modules-loaded event**: announces one non-empty loaded set

pub mod config;
pub mod directive;
pub mod modules;

// Re-export commonly used types
pub use config::{AmbiguousLoaderPolicy, ParsePolicyError};
pub use directive::{DirectiveGroup, ModulesDirective, TestSuite, discover};
pub use modules::{LoadedModules, ModulesLoadedEvent};
