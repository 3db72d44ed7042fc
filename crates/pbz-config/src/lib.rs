//! # pbz-config
//!
//! Layered configuration loading for pocketbase-zod using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PB_TYPEGEN_*` prefix)
//! 2. Project-level `pocketbase-zod.toml`
//! 3. User-level `~/.config/pocketbase-zod/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! The flat names used by the PocketBase tooling map onto config sections:
//!
//! | Variable                | Key                 |
//! |-------------------------|---------------------|
//! | `PB_TYPEGEN_URL`        | `remote.url`        |
//! | `PB_TYPEGEN_TOKEN`      | `remote.token`      |
//! | `PB_TYPEGEN_EMAIL`      | `remote.email`      |
//! | `PB_TYPEGEN_PASSWORD`   | `remote.password`   |
//! | `PB_TYPEGEN_OUT`        | `output.path`       |
//! | `PB_TYPEGEN_PROVENANCE` | `output.provenance` |
//!
//! Any other variable uses `__` as the section separator, so
//! `PB_TYPEGEN_OUTPUT__PATH` also sets `output.path`.
//!
//! # Usage
//!
//! ```no_run
//! use pbz_config::TypegenConfig;
//!
//! // Load `.env` from the current directory, then TOML + env:
//! let config = TypegenConfig::load_with_dotenv(None).expect("config");
//!
//! if config.remote.is_configured() {
//!     println!("PocketBase URL: {}", config.remote.url);
//! }
//! ```

mod error;
mod output;
mod remote;

pub use error::ConfigError;
pub use output::{DEFAULT_OUTPUT_PATH, OutputConfig};
pub use remote::RemoteConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix shared by every recognised environment variable.
pub const ENV_PREFIX: &str = "PB_TYPEGEN_";

/// Project-local config file, resolved against the working directory.
pub const LOCAL_CONFIG_FILE: &str = "pocketbase-zod.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TypegenConfig {
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl TypegenConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT read `.env` files; use [`Self::load_with_dotenv`] for that.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would only fail later, far from their source.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "output.path".into(),
                reason: "must not be empty".into(),
            });
        }
        let url = &self.remote.url;
        if !url.is_empty() && !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "remote.url".into(),
                reason: format!("expected an http:// or https:// URL, got '{url}'"),
            });
        }
        Ok(())
    }

    /// Load `.env` first, then configuration from all sources.
    ///
    /// `env_dir` is either a directory containing `.env` or the path of an
    /// env file itself. `None` looks in the current directory. A missing file
    /// is not an error. Variables already present in the process environment
    /// are never overwritten.
    pub fn load_with_dotenv(env_dir: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_dotenv(env_dir)?;
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or layer additional
    /// providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Self::env_provider())
    }

    fn env_provider() -> Env {
        Env::prefixed(ENV_PREFIX)
            .map(|key| {
                let key = key.as_str().to_ascii_lowercase();
                match key.as_str() {
                    "url" | "token" | "email" | "password" => format!("remote.{key}").into(),
                    "out" => "output.path".into(),
                    "provenance" => "output.provenance".into(),
                    _ => key.into(),
                }
            })
            .split("__")
    }

    /// Path to the user-global config file.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("pocketbase-zod").join("config.toml"))
    }

    /// Load a `.env` file into the process environment.
    ///
    /// Returns the path that was loaded, or `None` when there was nothing to
    /// load.
    pub fn load_dotenv(env_dir: Option<&Path>) -> Result<Option<PathBuf>, ConfigError> {
        let Some(dir) = env_dir else {
            return match dotenvy::dotenv() {
                Ok(path) => Ok(Some(path)),
                Err(error) if error.not_found() => Ok(None),
                Err(error) => Err(error.into()),
            };
        };

        let env_path = if dir.is_file() {
            dir.to_path_buf()
        } else {
            dir.join(".env")
        };
        if !env_path.is_file() {
            return Ok(None);
        }
        dotenvy::from_path(&env_path)?;
        Ok(Some(env_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = TypegenConfig::default();
        assert!(!config.remote.is_configured());
        assert_eq!(config.output.path, DEFAULT_OUTPUT_PATH);
        assert!(!config.output.provenance);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: TypegenConfig = TypegenConfig::figment().extract()?;
            assert!(!config.remote.is_configured());
            assert_eq!(config.output.path, "pocketbase-zod.ts");
            Ok(())
        });
    }

    #[test]
    fn validate_rejects_empty_output_path() {
        let mut config = TypegenConfig::default();
        config.output.path = "  ".into();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "output.path"
        ));
    }

    #[test]
    fn validate_checks_url_scheme() {
        let mut config = TypegenConfig::default();
        config.remote.url = "https://pb.example.com".into();
        assert!(config.validate().is_ok());

        config.remote.url = "pb.example.com".into();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "remote.url"
        ));
    }

    #[test]
    fn missing_env_dir_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = TypegenConfig::load_dotenv(Some(dir.path())).unwrap();
        assert!(loaded.is_none());
    }
}
