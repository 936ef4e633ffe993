//! describe-action - Markdown tables for action manifests
//!
//! Reads an `action.yml` manifest and renders its inputs and outputs as
//! alignment-padded Markdown tables, optionally asking for the type of each
//! entry that has none.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): manifest model, flag selection rules, ports
//! - **Application Layer** (`application`): the load → prompt → render workflow
//! - **Service Layer** (`services`): table building and type collection
//! - **Infrastructure Layer** (`infrastructure`): YAML loading, config, logging, terminal prompt
//! - **CLI Layer** (`cli`): argument parsing and Markdown output
//!
//! # Example
//!
//! ```
//! use describe_action::cli::output::MarkdownTableWriter;
//! use describe_action::domain::models::{Output, Outputs};
//!
//! let mut outputs = Outputs::new();
//! outputs.insert(
//!     "result".to_string(),
//!     Output { description: "The result.".to_string(), value_type: None },
//! );
//!
//! let mut writer = MarkdownTableWriter::new(Vec::new());
//! writer.write_outputs(&outputs).unwrap();
//! let table = String::from_utf8(writer.into_inner()).unwrap();
//! assert!(table.contains("| `result` | The result. |"));
//! ```

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    Input, Inputs, Manifest, ManifestSection, Output, Outputs, Selection, Settings, Tables,
    ValueType,
};
pub use domain::ports::{NullTypePrompt, TypePrompt};
pub use domain::{ConfigError, ManifestError};
pub use infrastructure::config::ConfigLoader;
pub use infrastructure::manifest::ManifestLoader;
pub use services::{TableData, TypeCollector};
