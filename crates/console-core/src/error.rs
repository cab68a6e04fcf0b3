//! Error types for console-core.
//!
//! Filtering itself never fails; these errors come from the edges of the
//! system: reading payloads and config files, and resolving names supplied
//! on the command line.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for console operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading listings or configuration.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O failure, optionally tied to the path being accessed.
    #[error("I/O error{}: {source}", path_suffix(.path))]
    Io {
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
        /// File involved, when known
        path: Option<PathBuf>,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// A payload parsed as JSON but does not have the expected shape.
    #[error("Invalid payload: {message}")]
    Payload {
        /// What was wrong with the payload
        message: String,
    },

    /// A collection name that no dataset answers to.
    #[error("Unknown collection: {name}")]
    UnknownCollection {
        /// The name that was requested
        name: String,
    },
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" at {}", p.display()),
        None => String::new(),
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source, path: None }
    }
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a new payload-shape error.
    pub fn payload<S: Into<String>>(message: S) -> Self {
        Error::Payload {
            message: message.into(),
        }
    }

    /// Wraps an I/O error together with the path that produced it.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            source,
            path: Some(path.as_ref().to_path_buf()),
        }
    }

    /// Creates an unknown-collection error.
    pub fn unknown_collection<S: Into<String>>(name: S) -> Self {
        Error::UnknownCollection { name: name.into() }
    }
}
