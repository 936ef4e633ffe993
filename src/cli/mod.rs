//! Command-line interface: argument parsing, output, and error reporting.

pub mod args;
pub mod output;
pub mod types;

pub use args::normalize_args;
pub use types::Cli;

use console::style;

/// Print a fatal error with its full cause chain to stderr.
pub fn handle_error(err: &anyhow::Error) {
    tracing::debug!(error = ?err, "describe-action failed");
    eprintln!("{} {err:#}", style("Error:").for_stderr().red().bold());
}
