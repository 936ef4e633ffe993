//! Infrastructure layer module
//!
//! This module contains the adapters that touch the outside world:
//! - Manifest file loading (serde_yaml)
//! - Configuration management (figment)
//! - Logging infrastructure (tracing)
//! - Terminal prompts (console)
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod logging;
pub mod manifest;
pub mod prompt;
