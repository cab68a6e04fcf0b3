//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Browse the platform dashboard's listings from the terminal.
#[derive(Parser, Debug)]
#[command(name = "platform-console")]
#[command(
    author,
    version,
    about = "Search and filter platform dashboard listings",
    long_about = None
)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Category and query selection shared by every listing command.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Category tag to select (defaults to "All")
    #[arg(long)]
    pub category: Option<String>,

    /// Search query
    #[arg(short, long)]
    pub query: Option<String>,
}

/// Arguments of the built-in dataset commands.
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Read items from a JSON payload instead of the built-in dataset
    #[arg(long, value_name = "FILE")]
    pub from: Option<PathBuf>,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// The template marketplace
    Templates(ListArgs),

    /// The extensions marketplace
    Extensions(ListArgs),

    /// Analytics environments, scoped by status
    Projects(ListArgs),

    /// The service catalog, scoped by maturity
    Services(ListArgs),

    /// List an arbitrary JSON payload
    Json(JsonArgs),

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Arguments of the `json` command.
#[derive(Args, Debug, Clone)]
pub struct JsonArgs {
    /// Payload file: a JSON array, or an object wrapping one
    pub file: PathBuf,

    /// Member of an envelope object holding the array
    #[arg(long)]
    pub collection: Option<String>,

    /// Comma-separated fields to search
    #[arg(long, value_delimiter = ',', required = true)]
    pub keys: Vec<String>,

    /// Field to build category tags from
    #[arg(long)]
    pub category_key: Option<String>,

    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Config subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,

    /// Print a value by dotted key (e.g. `display.width`)
    Get {
        /// Dotted key
        key: String,
    },

    /// Set a value by dotted key in the config file
    Set {
        /// Dotted key
        key: String,
        /// New value; booleans and numbers are detected
        value: String,
    },

    /// Write a default config file
    Init {
        /// Where to write it instead of the default location
        #[arg(long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

// ============================================================================
// Tests
// ============================================================================
