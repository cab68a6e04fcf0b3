//! Platform Console CLI
//!
//! Search and filter the platform dashboard's listings from a terminal.

#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use console_cli::config_handlers::handle_config_command;
use console_cli::{Cli, Command, ConsoleConfig, commands};
use console_core::ConfigManager;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.config.as_deref();
    let load = || ConsoleConfig::load(config_path).context("failed to load configuration");

    let output = match &cli.command {
        Command::Config { action } => {
            handle_config_command(config_path, action.clone())?;
            return Ok(());
        }
        Command::Templates(args) => commands::templates(args, &load()?)?,
        Command::Extensions(args) => commands::extensions(args, &load()?)?,
        Command::Projects(args) => commands::projects(args, &load()?)?,
        Command::Services(args) => commands::services(args, &load()?)?,
        Command::Json(args) => commands::json(args, &load()?)
            .with_context(|| format!("failed to list {}", args.file.display()))?,
    };

    println!("{output}");
    Ok(())
}

/// Logs go to stderr. `-v` forces debug; otherwise `RUST_LOG` applies,
/// defaulting to warnings only.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!("logging initialised");
}
