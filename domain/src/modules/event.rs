//! Modules-loaded event

use super::loaded::LoadedModules;
use serde::{Deserialize, Serialize};

/// Published once per directive whose load touched at least one file.
///
/// Immutable after construction; subscribers receive clones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModulesLoadedEvent {
    files: LoadedModules,
}

impl ModulesLoadedEvent {
    pub fn new(files: LoadedModules) -> Self {
        Self { files }
    }

    pub fn files(&self) -> &LoadedModules {
        &self.files
    }

    pub fn into_files(self) -> LoadedModules {
        self.files
    }
}
