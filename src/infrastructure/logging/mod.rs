//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - Pretty or JSON console output on stderr
//! - Optional JSON log file with rotation

pub mod logger;

pub use logger::{LoggerImpl, LOG_FILE_NAME};
