//! # console-cli
//!
//! Terminal front-end for the Platform Console listings.
//!
//! - [`cli`]: clap argument definitions
//! - [`commands`]: the listing commands, returning rendered text
//! - [`config`]: [`ConsoleConfig`], the TOML configuration
//! - [`config_handlers`]: `config path|get|set|init`
//! - [`render`]: cards, tag lines, and the empty message as plain text

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod render;

pub use cli::{Cli, Command, ConfigAction};
pub use config::ConsoleConfig;
