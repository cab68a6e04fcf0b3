//! Console Core: the shared record model, errors, and config plumbing.
//!
//! This crate provides the foundational types used across all console crates.
//! It has no internal workspace dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`record`]: The [`Record`] trait and primitive field views
//! - [`json`]: [`JsonRecord`], a record over an untyped JSON object
//! - [`config`]: The [`ConfigManager`] trait for TOML config files

#![doc = include_str!("../README.md")]

pub mod config;
pub mod error;
pub mod json;
pub mod record;

// Re-export key types at crate root for convenience
pub use config::ConfigManager;
pub use error::{Error, Result};
pub use json::JsonRecord;
pub use record::{FieldValue, Number, Record, RecordId};
