//! Config file management shared by console front-ends.
//!
//! [`ConfigManager`] captures how a TOML-backed configuration type is found,
//! loaded, and written back. Implementors supply a project name; path
//! resolution and (de)serialization come for free.
//!
//! Resolution order for the config file:
//!
//! 1. An explicit path (e.g. `--config <path>`)
//! 2. The `<PROJECT>_CONFIG` environment variable
//! 3. `<platform config dir>/<project>/config.toml`

use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Behaviour for a TOML configuration type.
pub trait ConfigManager: Serialize + DeserializeOwned + Default {
    /// Project name, used for the config directory and environment variable.
    fn project_name() -> &'static str;

    /// Environment variable that overrides the config path.
    fn env_var() -> String {
        format!(
            "{}_CONFIG",
            Self::project_name().to_uppercase().replace('-', "_")
        )
    }

    /// Platform default location of the config file.
    fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(Self::project_name()).join("config.toml"))
    }

    /// Resolve the config path from an explicit value, the environment, or
    /// the platform default, in that order.
    fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }
        if let Ok(path) = std::env::var(Self::env_var())
            && !path.is_empty()
        {
            return Some(PathBuf::from(path));
        }
        Self::default_config_path()
    }

    /// Load the configuration.
    ///
    /// A missing file is not an error: defaults are returned. A file that
    /// exists but cannot be read or parsed is.
    fn load(explicit: Option<&str>) -> Result<Self> {
        let Some(path) = Self::resolve_config_path(explicit) else {
            log::debug!("No config directory available, using defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            log::debug!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
        let config = toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Serialize the configuration as pretty TOML.
    fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    #[serde(default)]
    struct SampleConfig {
        width: usize,
        label: String,
    }

    impl Default for SampleConfig {
        fn default() -> Self {
            Self {
                width: 72,
                label: "All".to_string(),
            }
        }
    }

    impl ConfigManager for SampleConfig {
        fn project_name() -> &'static str {
            "sample-console"
        }
    }

    #[test]
    fn test_env_var_name() {
        assert_eq!(SampleConfig::env_var(), "SAMPLE_CONSOLE_CONFIG");
    }

    #[test]
    fn test_resolve_explicit_path_wins() {
        let path = SampleConfig::resolve_config_path(Some("/explicit/config.toml"));
        assert_eq!(path, Some(PathBuf::from("/explicit/config.toml")));
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");
        let config = SampleConfig::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config, SampleConfig::default());
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "width = 100\n").unwrap();

        let config = SampleConfig::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.width, 100);
        assert_eq!(config.label, "All");
    }

    #[test]
    fn test_load_malformed_file_is_config_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "width = [").unwrap();

        let err = SampleConfig::load(Some(path.to_str().unwrap())).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_to_toml_string() {
        let toml_str = SampleConfig::default().to_toml_string().unwrap();
        assert!(toml_str.contains("width = 72"));
        assert!(toml_str.contains("label = \"All\""));
    }
}
