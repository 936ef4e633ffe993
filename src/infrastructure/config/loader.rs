use std::path::Path;

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;

use crate::domain::models::{Settings, SettingsOverrides};
use crate::domain::ConfigError;

/// Project config file picked up from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = ".describe-action.yaml";

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "DESCRIBE_ACTION_";

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load settings with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. `config_file`, or `.describe-action.yaml` when none is given
    /// 3. Environment variables (`DESCRIBE_ACTION_*`, `__` for nesting)
    /// 4. Command-line overrides
    pub fn load(config_file: Option<&Path>, overrides: &SettingsOverrides) -> Result<Settings> {
        let settings: Settings = Self::figment(config_file, overrides)?
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&settings)?;
        Ok(settings)
    }

    /// Build the layered figment without extracting it.
    pub fn figment(
        config_file: Option<&Path>,
        overrides: &SettingsOverrides,
    ) -> Result<Figment, ConfigError> {
        let file = match config_file {
            Some(path) if !path.is_file() => {
                return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
            }
            Some(path) => Yaml::file(path),
            None => Yaml::file(DEFAULT_CONFIG_FILE),
        };

        Ok(Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(file)
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .merge(Serialized::defaults(overrides)))
    }

    /// Validate settings after loading
    pub fn validate(settings: &Settings) -> Result<(), ConfigError> {
        if settings.max_column_width == 0 {
            return Err(ConfigError::InvalidMaxColumnWidth(
                settings.max_column_width,
            ));
        }

        if settings.manifest_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyManifestPath);
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&settings.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(settings.logging.level.clone()));
        }

        Ok(())
    }
}
