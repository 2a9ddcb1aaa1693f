//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order
const PROJECT_CONFIG_FILES: [&str; 2] = ["modsync.toml", ".modsync.toml"];

/// Prefix for environment overrides (`MODSYNC_CLIENT__URL`, ...)
const ENV_PREFIX: &str = "MODSYNC_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `MODSYNC_*`, `__` separates nested keys
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./modsync.toml` or `./.modsync.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/modsync/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        // Add global config (XDG or fallback)
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        // Add project-level config file (first match wins)
        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        // Add explicit config path (highest priority for files)
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/modsync/config.toml if set,
    /// otherwise falls back to ~/.config/modsync/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("modsync").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use modsync_domain::AmbiguousLoaderPolicy;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert!(config.client.url.is_none());
        assert!(config.suites.is_empty());
    }

    #[test]
    fn test_global_config_path_mentions_modsync() {
        if let Some(path) = ConfigLoader::global_config_path() {
            assert!(path.ends_with("modsync/config.toml"));
        }
    }

    #[test]
    fn test_project_file_is_merged() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "modsync.toml",
                r#"
[client]
url = "http://localhost:8040"

[[suites]]
name = "Foo"
directive = { base_dir = "./mods" }
"#,
            )?;

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.client.url.as_deref(), Some("http://localhost:8040"));
            assert_eq!(config.client.timeout_secs, 30);
            assert!(config.suite("Foo").is_some());
            Ok(())
        });
    }

    #[test]
    fn test_explicit_path_overrides_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file("modsync.toml", "[events]\ncapacity = 8\n")?;
            jail.create_file("ci.toml", "[events]\ncapacity = 64\n")?;

            let config = ConfigLoader::load(Some(Path::new("ci.toml"))).map_err(|e| *e)?;
            assert_eq!(config.events.capacity, 64);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_files() {
        Jail::expect_with(|jail| {
            jail.create_file(".modsync.toml", "[resolver]\nambiguous_loaders = \"fallback\"\n")?;
            jail.set_env("MODSYNC_RESOLVER__AMBIGUOUS_LOADERS", "reject");
            jail.set_env("MODSYNC_CLIENT__URL", "http://ci-db:8040");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.resolver.ambiguous_loaders, AmbiguousLoaderPolicy::Reject);
            assert_eq!(config.client.url.as_deref(), Some("http://ci-db:8040"));
            Ok(())
        });
    }
}
