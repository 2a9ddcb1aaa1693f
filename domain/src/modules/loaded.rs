//! Loaded module set value object

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Files a loader acted on during one invocation.
///
/// Ordered so that logs and events are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoadedModules(BTreeSet<PathBuf>);

impl LoadedModules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a file. Returns `false` if it was already present.
    pub fn insert(&mut self, file: impl Into<PathBuf>) -> bool {
        self.0.insert(file.into())
    }

    pub fn contains(&self, file: impl AsRef<Path>) -> bool {
        self.0.contains(file.as_ref())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.0.iter().map(PathBuf::as_path)
    }

    pub fn into_inner(self) -> BTreeSet<PathBuf> {
        self.0
    }
}

impl<P: Into<PathBuf>> FromIterator<P> for LoadedModules {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeSet<PathBuf>> for LoadedModules {
    fn from(files: BTreeSet<PathBuf>) -> Self {
        Self(files)
    }
}
