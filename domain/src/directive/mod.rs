//! Directives - which directories a suite needs synchronized
//!
//! - [`ModulesDirective`] / [`DirectiveGroup`]: the declarative values
//! - [`TestSuite`]: a named suite carrying directives
//! - [`discover`]: ordered extraction of a suite's directives

pub mod discovery;
pub mod suite;
pub mod value_objects;

pub use discovery::discover;
pub use suite::TestSuite;
pub use value_objects::{DirectiveGroup, ModulesDirective};
