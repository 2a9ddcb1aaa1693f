//! Directory modules loader
//!
//! This module provides [`DirectoryModulesLoader`], the default
//! [`ModulesLoaderPort`] built when no loader is registered. It uploads every
//! regular file below a base directory through a [`ServiceClient`].
//!
//! # Module URIs
//!
//! A file's URI is its path relative to the base directory, `/`-separated,
//! under the configured prefix:
//!
//! ```text
//! base_dir/lib/users.sjs  ->  /ext/lib/users.sjs
//! ```
//!
//! Hidden files and directories (leading `.`) are skipped. There is no change
//! detection: every load uploads every file.

use crate::config::DEFAULT_MODULE_PREFIX;
use async_trait::async_trait;
use glob::{MatchOptions, Pattern, glob_with};
use modsync_application::{LoadError, LoaderFactory, ModulesLoaderPort, ServiceClient};
use modsync_domain::LoadedModules;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Uploads the files of a directory to the backend service.
pub struct DirectoryModulesLoader {
    client: Arc<dyn ServiceClient>,
    module_prefix: String,
}

impl DirectoryModulesLoader {
    pub fn new(client: Arc<dyn ServiceClient>) -> Self {
        Self {
            client,
            module_prefix: DEFAULT_MODULE_PREFIX.to_string(),
        }
    }

    pub fn with_module_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.module_prefix = prefix.into();
        self
    }

    /// Lists the non-hidden regular files below `base_dir`, sorted.
    ///
    /// Blocking; run it off the async workers.
    fn module_files(base_dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
        let root = if base_dir.as_os_str().is_empty() {
            Path::new(".")
        } else {
            base_dir
        };
        let base = root.to_str().ok_or_else(|| {
            LoadError::Other(format!("non UTF-8 base directory: {}", root.display()))
        })?;
        let pattern = format!("{}/**/*", Pattern::escape(base.trim_end_matches('/')));

        let options = MatchOptions {
            require_literal_leading_dot: true,
            ..MatchOptions::new()
        };
        let entries = glob_with(&pattern, options)
            .map_err(|e| LoadError::Other(format!("invalid modules pattern {pattern}: {e}")))?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| LoadError::Io {
                path: e.path().to_path_buf(),
                source: e.into_error(),
            })?;
            if path.is_file() {
                files.push(normalize(&path));
            }
        }
        files.sort();
        Ok(files)
    }

    /// URI under which `file` is stored.
    fn module_uri(&self, base_dir: &Path, file: &Path) -> Result<String, LoadError> {
        let relative = relative_module_path(base_dir, file)?;
        let segments: Vec<_> = relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(s) => Some(s.to_string_lossy()),
                _ => None,
            })
            .collect();

        Ok(format!(
            "{}/{}",
            self.module_prefix.trim_end_matches('/'),
            segments.join("/")
        ))
    }
}

/// Drops `.` components, so `./mods-a` and `mods-a` compare equal.
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Path of `file` relative to `base_dir`, both taken without `.` components.
fn relative_module_path(base_dir: &Path, file: &Path) -> Result<PathBuf, LoadError> {
    let base = normalize(base_dir);
    let file = normalize(file);
    file.strip_prefix(&base)
        .map(Path::to_path_buf)
        .map_err(|_| {
            LoadError::Other(format!(
                "module {} is not below {}",
                file.display(),
                base_dir.display()
            ))
        })
}

#[async_trait]
impl ModulesLoaderPort for DirectoryModulesLoader {
    async fn load_modules(&self, base_dir: &Path) -> Result<Option<LoadedModules>, LoadError> {
        let is_dir = tokio::fs::metadata(base_dir)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false);
        if !is_dir {
            return Err(LoadError::MissingDirectory(base_dir.to_path_buf()));
        }

        let root = normalize(base_dir);
        let files = tokio::task::spawn_blocking(move || Self::module_files(&root))
            .await
            .map_err(|e| LoadError::Other(format!("module listing task failed: {e}")))??;
        if files.is_empty() {
            debug!("No module files under {}", base_dir.display());
            return Ok(None);
        }

        let mut loaded = LoadedModules::new();
        for file in files {
            let uri = self.module_uri(base_dir, &file)?;
            let content = tokio::fs::read(&file).await.map_err(|source| LoadError::Io {
                path: file.clone(),
                source,
            })?;
            self.client.put_module(&uri, content).await?;
            debug!("Loaded module {} as {}", file.display(), uri);
            loaded.insert(file);
        }

        Ok(Some(loaded))
    }
}

/// Builds [`DirectoryModulesLoader`]s with a fixed module prefix.
#[derive(Debug, Clone)]
pub struct DirectoryLoaderFactory {
    module_prefix: String,
}

impl DirectoryLoaderFactory {
    pub fn new(module_prefix: impl Into<String>) -> Self {
        Self {
            module_prefix: module_prefix.into(),
        }
    }
}

impl Default for DirectoryLoaderFactory {
    fn default() -> Self {
        Self::new(DEFAULT_MODULE_PREFIX)
    }
}

impl LoaderFactory for DirectoryLoaderFactory {
    fn build(&self, client: Arc<dyn ServiceClient>) -> Arc<dyn ModulesLoaderPort> {
        Arc::new(DirectoryModulesLoader::new(client).with_module_prefix(self.module_prefix.clone()))
    }
}
