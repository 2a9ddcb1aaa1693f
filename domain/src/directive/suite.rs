//! Test suite descriptor
//!
//! A [`TestSuite`] is the explicit stand-in for a test class: a name plus the
//! directives attached to it. Suites are built in code or declared in the
//! configuration file and are never mutated once handed to the harness.

use super::discovery::discover;
use super::value_objects::{DirectiveGroup, ModulesDirective};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A test suite and its module-loading directives.
///
/// Both a single directive and a group may be present; discovery prefers the
/// group (see [`discover`](super::discovery::discover)).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSuite {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directive: Option<ModulesDirective>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directive_group: Option<DirectiveGroup>,
}

impl TestSuite {
    /// Creates a suite with no directives.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            directive: None,
            directive_group: None,
        }
    }

    pub fn with_directive(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.directive = Some(ModulesDirective::new(base_dir));
        self
    }

    pub fn with_directive_group<I, P>(mut self, base_dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.directive_group = Some(base_dirs.into_iter().collect());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether discovery yields at least one directive for this suite.
    ///
    /// An empty group shadows the single directive, so such a suite has none.
    pub fn has_directives(&self) -> bool {
        !discover(self).is_empty()
    }
}
