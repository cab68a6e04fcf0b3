//! Status badges shown on project and service cards.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four badge kinds a card can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    /// Green.
    Healthy,
    /// Yellow.
    Warning,
    /// Red.
    Error,
    /// Neutral; waiting on something.
    Pending,
}

impl StatusKind {
    /// Badge text used when the caller supplies none.
    pub fn default_label(self) -> &'static str {
        match self {
            StatusKind::Healthy => "Healthy",
            StatusKind::Warning => "Warning",
            StatusKind::Error => "Error",
            StatusKind::Pending => "Pending",
        }
    }

    /// Badge text: `label` when given, otherwise the default.
    pub fn label<'a>(self, label: Option<&'a str>) -> &'a str {
        label.unwrap_or(self.default_label())
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_labels() {
        assert_eq!(StatusKind::Healthy.to_string(), "Healthy");
        assert_eq!(StatusKind::Pending.label(None), "Pending");
        assert_eq!(StatusKind::Error.label(Some("Down")), "Down");
    }

    #[test]
    fn test_serde_is_lowercase() {
        let json = serde_json::to_string(&StatusKind::Warning).unwrap_or_default();
        assert_eq!(json, "\"warning\"");
    }
}
