//! Directive value objects
//!
//! A directive names one base directory whose modules must be synchronized
//! before a suite runs. Directives are authored once and never mutated.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A single "load modules from here" directive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModulesDirective {
    /// Directory the loader synchronizes from
    pub base_dir: PathBuf,
}

impl ModulesDirective {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

/// An ordered group of directives.
///
/// Declaration order is significant: directories are loaded, and their
/// events published, in exactly this order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DirectiveGroup {
    pub directives: Vec<ModulesDirective>,
}

impl DirectiveGroup {
    pub fn new(directives: Vec<ModulesDirective>) -> Self {
        Self { directives }
    }

    pub fn len(&self) -> usize {
        self.directives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModulesDirective> {
        self.directives.iter()
    }
}

impl<P: Into<PathBuf>> FromIterator<P> for DirectiveGroup {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(ModulesDirective::new).collect())
    }
}
