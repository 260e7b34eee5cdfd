//! Top-level classifier configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ServerConfig, StorageBackend, StorageConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`SLC_*`)
/// 3. Project config (explicit path, or `slc.toml` in the root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SlcConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind: Option<String>,
    pub backend: Option<String>,
    pub db_path: Option<String>,
}

impl SlcConfig {
    /// Load configuration with layered resolution.
    ///
    /// `config_path` names an explicit file that must exist; without it,
    /// `slc.toml` in `root` is merged when present.
    pub fn load(
        root: &Path,
        config_path: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: project config
        match config_path {
            Some(path) => Self::merge_toml_file(&mut config, path)?,
            None => {
                let project_config_path = root.join(PROJECT_CONFIG_FILE);
                if project_config_path.exists() {
                    Self::merge_toml_file(&mut config, &project_config_path)?;
                }
            }
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &SlcConfig) -> Result<(), ConfigError> {
        if let Some(ref header) = config.server.user_id_header {
            if header.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "server.user_id_header".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if let Some(ref cookie) = config.server.anon_cookie_name {
            if cookie.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "server.anon_cookie_name".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if let Some(ref backend) = config.storage.backend {
            if let Err(message) = backend.parse::<StorageBackend>() {
                return Err(ConfigError::ValidationFailed {
                    field: "storage.backend".to_string(),
                    message,
                });
            }
        }
        if config.storage.read_pool_size == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "storage.read_pool_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut SlcConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: SlcConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut SlcConfig, other: &SlcConfig) {
        // Server
        if other.server.bind.is_some() {
            base.server.bind = other.server.bind.clone();
        }
        if other.server.user_id_header.is_some() {
            base.server.user_id_header = other.server.user_id_header.clone();
        }
        if other.server.anon_cookie_name.is_some() {
            base.server.anon_cookie_name = other.server.anon_cookie_name.clone();
        }

        // Storage
        if other.storage.backend.is_some() {
            base.storage.backend = other.storage.backend.clone();
        }
        if other.storage.path.is_some() {
            base.storage.path = other.storage.path.clone();
        }
        if other.storage.read_pool_size.is_some() {
            base.storage.read_pool_size = other.storage.read_pool_size;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `SLC_BIND`, `SLC_STORAGE_BACKEND`, etc.
    fn apply_env_overrides(config: &mut SlcConfig) {
        if let Ok(val) = std::env::var("SLC_BIND") {
            config.server.bind = Some(val);
        }
        if let Ok(val) = std::env::var("SLC_USER_ID_HEADER") {
            config.server.user_id_header = Some(val);
        }
        if let Ok(val) = std::env::var("SLC_ANON_COOKIE_NAME") {
            config.server.anon_cookie_name = Some(val);
        }
        if let Ok(val) = std::env::var("SLC_STORAGE_BACKEND") {
            config.storage.backend = Some(val);
        }
        if let Ok(val) = std::env::var("SLC_DB_PATH") {
            config.storage.path = Some(val);
        }
        if let Ok(val) = std::env::var("SLC_READ_POOL_SIZE") {
            if let Ok(v) = val.parse::<usize>() {
                config.storage.read_pool_size = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut SlcConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.bind {
            config.server.bind = Some(v.clone());
        }
        if let Some(ref v) = cli.backend {
            config.storage.backend = Some(v.clone());
        }
        if let Some(ref v) = cli.db_path {
            config.storage.path = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
