//! CLI type definitions
//!
//! This module contains the clap structure that defines the CLI interface.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::models::SettingsOverrides;

#[derive(Parser, Debug)]
#[command(name = "describe-action")]
#[command(about = "Render the inputs and outputs of an action.yml as Markdown tables", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The filepath to action.yml [default: action.yml]
    #[arg(long = "yaml", value_name = "PATH")]
    pub yaml: Option<PathBuf>,

    /// Whether only print inputs
    #[arg(long)]
    pub input: bool,

    /// Whether only print outputs
    #[arg(long)]
    pub output: bool,

    /// Whether table has types (prompts for missing ones)
    #[arg(long = "type")]
    pub prompt_types: bool,

    /// Configuration file [default: .describe-action.yaml when present]
    #[arg(long, value_name = "PATH", env = "DESCRIBE_ACTION_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Settings given on the command line. Boolean flags only override when
    /// they are set, so config files and environment can turn them on too.
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            manifest_path: self.yaml.clone(),
            only_inputs: self.input.then_some(true),
            only_outputs: self.output.then_some(true),
            prompt_types: self.prompt_types.then_some(true),
        }
    }
}
