pub mod config;
pub mod manifest;
pub mod selection;

pub use config::{LogFormat, LoggingConfig, RotationPolicy, Settings, SettingsOverrides};
pub use manifest::{
    Input, Inputs, Manifest, ManifestSection, Output, Outputs, TypedEntry, ValueType,
};
pub use selection::{Selection, Tables};
