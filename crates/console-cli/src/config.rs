//! The console's TOML configuration.
//!
//! ```toml
//! [list]
//! placeholder = "Search..."
//! empty_message = "No results found"
//!
//! [display]
//! width = 72
//! show_counts = true
//! ```
//!
//! `list.placeholder` applies to ad-hoc JSON listings; the built-in datasets
//! keep their own hints. `list.empty_message` applies everywhere.

use console_core::ConfigManager;
use console_search::ListConfig;
use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Search box hint and empty message.
    #[serde(default)]
    pub list: ListConfig,

    /// Terminal rendering.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// How cards and tags are printed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Maximum card width in columns.
    #[serde(default = "default_width")]
    pub width: usize,

    /// Whether tags show their count badge.
    #[serde(default = "default_show_counts")]
    pub show_counts: bool,
}

fn default_width() -> usize {
    72
}

fn default_show_counts() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            show_counts: default_show_counts(),
        }
    }
}

impl ConfigManager for ConsoleConfig {
    fn project_name() -> &'static str {
        "platform-console"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConsoleConfig::default();
        assert_eq!(config.display.width, 72);
        assert!(config.display.show_counts);
        assert_eq!(config.list.empty_message, "No results found");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: ConsoleConfig = toml::from_str("[display]\nwidth = 100\n").unwrap();
        assert_eq!(config.display.width, 100);
        assert!(config.display.show_counts);
        assert_eq!(config.list, ListConfig::default());
    }

    #[test]
    fn test_env_var() {
        assert_eq!(ConsoleConfig::env_var(), "PLATFORM_CONSOLE_CONFIG");
    }

    #[test]
    fn test_toml_has_sections() {
        let text = ConsoleConfig::default().to_toml_string().unwrap();
        assert!(text.contains("[list]"));
        assert!(text.contains("[display]"));
        assert!(text.contains("show_counts = true"));
    }
}
