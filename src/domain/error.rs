use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading an action manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read manifest {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl ManifestError {
    /// Path of the manifest that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid max_column_width: {0}. Must be at least 1")]
    InvalidMaxColumnWidth(u16),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Manifest path cannot be empty")]
    EmptyManifestPath,

    #[error("Config file not found: {}", .0.display())]
    MissingConfigFile(PathBuf),
}
