//! Domain layer for describe-action
//!
//! The manifest model, the flag selection rules, and the ports that the
//! infrastructure layer implements.

pub mod error;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use error::{ConfigError, ManifestError};
