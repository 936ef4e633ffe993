//! describe-action CLI entry point.

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use describe_action::cli::{self, Cli};
use describe_action::infrastructure::config::ConfigLoader;
use describe_action::infrastructure::logging::LoggerImpl;
use describe_action::infrastructure::prompt::ConsoleSelect;
use describe_action::NullTypePrompt;

fn main() -> ExitCode {
    let cli = Cli::parse_from(cli::normalize_args(std::env::args_os()));

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            cli::handle_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let settings = ConfigLoader::load(cli.config.as_deref(), &cli.overrides())?;
    let _logger = LoggerImpl::init(&settings.logging)?;

    let stdout = io::stdout().lock();
    if settings.prompt_types {
        describe_action::application::run(&settings, ConsoleSelect::new(), stdout)
    } else {
        describe_action::application::run(&settings, NullTypePrompt, stdout)
    }
}
