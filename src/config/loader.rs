//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.userfetch.toml` in the working directory
//! 4. `~/.config/userfetch/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::constants::{self, DEFAULT_API_URL, DEFAULT_CITY_PREFIX};
use crate::env::Env;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub filter: FilterConfig,
}

/// Where records are fetched from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub url: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// Which records are displayed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub city_prefix: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            city_prefix: DEFAULT_CITY_PREFIX.to_string(),
        }
    }
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads from global config, the config in `work_dir`, then applies
    /// environment variable overrides. CLI flags are applied by the caller
    /// through [`Config::apply_overrides`].
    pub fn load(work_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let global = Self::global_config_path();
        Self::load_layers(global.as_deref(), work_dir, env)
    }

    fn load_layers(
        global_path: Option<&Path>,
        work_dir: Option<&Path>,
        env: &Env,
    ) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(path) = global_path.filter(|p| p.exists()) {
            debug!(path = %path.display(), "loading global config");
            config.merge(Self::load_file(path)?);
        }

        if let Some(dir) = work_dir {
            let local_path = dir.join(constants::CONFIG_FILENAME);
            if local_path.exists() {
                debug!(path = %local_path.display(), "loading local config");
                config.merge(Self::load_file(&local_path)?);
            }
        }

        for name in config.apply_env_vars(env) {
            eprintln!("Warning: ignoring blank {name} value");
        }

        Ok(config)
    }

    /// Load a config from a specific file.
    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge another config into this one; only values `other` changed from
    /// the defaults take effect.
    fn merge(&mut self, other: Config) {
        if other.source != SourceConfig::default() {
            self.source.url = other.source.url;
        }
        if other.filter != FilterConfig::default() {
            self.filter.city_prefix = other.filter.city_prefix;
        }
    }

    /// Apply environment variable overrides.
    ///
    /// Returns the names of variables that were set but blank and therefore
    /// ignored, so the caller can warn about them.
    fn apply_env_vars(&mut self, env: &Env) -> Vec<&'static str> {
        let mut ignored = Vec::new();
        if let Some(url) = env.var(constants::ENV_URL) {
            if url.trim().is_empty() {
                ignored.push(constants::ENV_URL);
            } else {
                self.source.url = url;
            }
        }
        if let Some(prefix) = env.var(constants::ENV_FILTER) {
            if prefix.trim().is_empty() {
                ignored.push(constants::ENV_FILTER);
            } else {
                self.filter.city_prefix = prefix;
            }
        }
        ignored
    }

    /// Apply explicit overrides (CLI flags). `None` leaves the value alone.
    pub fn apply_overrides(&mut self, url: Option<String>, city_prefix: Option<String>) {
        if let Some(url) = url {
            self.source.url = url;
        }
        if let Some(prefix) = city_prefix {
            self.filter.city_prefix = prefix;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env() -> Env {
        Env::mock(Vec::<(&str, &str)>::new())
    }

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.source.url, "https://jsonplaceholder.typicode.com/users");
        assert_eq!(config.filter.city_prefix, "S");
    }

    #[test]
    fn parse_toml_config() {
        let toml_str = r#"
[source]
url = "http://localhost:8080/users"

[filter]
city_prefix = "g"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.source.url, "http://localhost:8080/users");
        assert_eq!(config.filter.city_prefix, "g");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("[filter]\ncity_prefix = \"W\"\n").unwrap();
        assert_eq!(config.source.url, DEFAULT_API_URL);
        assert_eq!(config.filter.city_prefix, "W");
    }

    #[test]
    fn merge_keeps_base_when_other_is_default() {
        let mut base = Config::default();
        base.filter.city_prefix = "G".into();
        base.merge(Config::default());
        assert_eq!(base.filter.city_prefix, "G");
    }

    #[test]
    fn merge_overrides_non_default_values() {
        let mut base = Config::default();
        let mut other = Config::default();
        other.source.url = "http://other/users".into();
        base.merge(other);
        assert_eq!(base.source.url, "http://other/users");
        assert_eq!(base.filter.city_prefix, "S");
    }

    #[test]
    fn load_file_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "not valid {{ toml").unwrap();

        let err = Config::load_file(&path).unwrap_err();
        assert!(err.to_string().contains("parse"));
    }

    #[test]
    fn load_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_file(&dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("read"));
    }

    #[test]
    fn local_file_overrides_global() {
        let global_dir = tempfile::tempdir().unwrap();
        let global = global_dir.path().join("config.toml");
        std::fs::write(
            &global,
            "[source]\nurl = \"http://global/users\"\n[filter]\ncity_prefix = \"G\"\n",
        )
        .unwrap();

        let work = tempfile::tempdir().unwrap();
        std::fs::write(
            work.path().join(".userfetch.toml"),
            "[filter]\ncity_prefix = \"L\"\n",
        )
        .unwrap();

        let config = Config::load_layers(Some(&global), Some(work.path()), &no_env()).unwrap();
        assert_eq!(config.source.url, "http://global/users");
        assert_eq!(config.filter.city_prefix, "L");
    }

    #[test]
    fn env_overrides_files() {
        let work = tempfile::tempdir().unwrap();
        std::fs::write(
            work.path().join(".userfetch.toml"),
            "[source]\nurl = \"http://local/users\"\n",
        )
        .unwrap();

        let env = Env::mock([
            ("USERFETCH_URL", "http://env/users"),
            ("USERFETCH_FILTER", "e"),
        ]);
        let config = Config::load_layers(None, Some(work.path()), &env).unwrap();
        assert_eq!(config.source.url, "http://env/users");
        assert_eq!(config.filter.city_prefix, "e");
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let env = Env::mock([("USERFETCH_FILTER", "")]);
        let config = Config::load_layers(None, None, &env).unwrap();
        assert_eq!(config.filter.city_prefix, "S");
    }

    #[test]
    fn blank_env_values_are_reported_for_warning() {
        let env = Env::mock([
            ("USERFETCH_URL", "  "),
            ("USERFETCH_FILTER", ""),
        ]);
        let mut config = Config::default();
        let ignored = config.apply_env_vars(&env);
        assert_eq!(ignored, vec!["USERFETCH_URL", "USERFETCH_FILTER"]);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn set_env_values_are_not_reported() {
        let env = Env::mock([("USERFETCH_FILTER", "m")]);
        let mut config = Config::default();
        assert!(config.apply_env_vars(&env).is_empty());
        assert_eq!(config.filter.city_prefix, "m");
    }

    #[test]
    fn missing_files_yield_defaults() {
        let work = tempfile::tempdir().unwrap();
        let absent = work.path().join("nope.toml");
        let config = Config::load_layers(Some(&absent), Some(work.path()), &no_env()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn overrides_win_over_everything() {
        let env = Env::mock([("USERFETCH_FILTER", "e")]);
        let mut config = Config::load_layers(None, None, &env).unwrap();
        config.apply_overrides(Some("http://cli/users".into()), Some("c".into()));
        assert_eq!(config.source.url, "http://cli/users");
        assert_eq!(config.filter.city_prefix, "c");

        config.apply_overrides(None, None);
        assert_eq!(config.filter.city_prefix, "c");
    }

    #[test]
    fn global_config_path_mentions_app() {
        if let Some(p) = Config::global_config_path() {
            assert!(p.to_string_lossy().contains("userfetch"));
        }
    }
}
