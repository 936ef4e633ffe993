use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::selection::Selection;

/// Resolved runtime settings for a single invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Settings {
    /// Path to the action manifest
    #[serde(default = "default_manifest_path")]
    pub manifest_path: PathBuf,

    /// Render only the inputs table
    #[serde(default)]
    pub only_inputs: bool,

    /// Render only the outputs table
    #[serde(default)]
    pub only_outputs: bool,

    /// Prompt for entries that have no type annotation
    #[serde(default)]
    pub prompt_types: bool,

    /// Upper bound on the content width of any table column
    #[serde(default = "default_max_column_width")]
    pub max_column_width: u16,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_manifest_path() -> PathBuf {
    PathBuf::from("action.yml")
}

const fn default_max_column_width() -> u16 {
    256
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            manifest_path: default_manifest_path(),
            only_inputs: false,
            only_outputs: false,
            prompt_types: false,
            max_column_width: default_max_column_width(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Settings {
    pub const fn selection(&self) -> Selection {
        Selection::new(self.only_inputs, self.only_outputs)
    }
}

/// Settings supplied on the command line. Only flags that were actually
/// given are serialized, so unset ones never mask file or env values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SettingsOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest_path: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_inputs: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_outputs: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_types: Option<bool>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Console log format: json or pretty
    #[serde(default)]
    pub format: LogFormat,

    /// Directory for JSON log files (optional, console only when unset)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// Log file rotation policy
    #[serde(default)]
    pub rotation: RotationPolicy,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            log_dir: None,
            rotation: RotationPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RotationPolicy {
    #[default]
    Daily,
    Hourly,
    Never,
}
