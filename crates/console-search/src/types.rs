//! Common types for listings.
//!
//! These are the transient pieces of list state and the presentation
//! defaults a listing falls back on.

use serde::{Deserialize, Serialize};

/// Free-text search state owned by one list.
///
/// Created empty when a list is mounted and dropped with it; never shared
/// between lists and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchState {
    /// The query exactly as typed.
    pub query: String,
}

impl SearchState {
    /// Create state holding `query`.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    /// `true` when the query is empty or whitespace only, i.e. the list is
    /// not being searched.
    pub fn is_blank(&self) -> bool {
        self.query.trim().is_empty()
    }

    /// The lower-cased needle to match against, or `None` when blank.
    ///
    /// Only blankness is judged on the trimmed query; a non-blank query is
    /// matched with its surrounding whitespace intact.
    pub fn needle(&self) -> Option<String> {
        if self.is_blank() {
            None
        } else {
            Some(self.query.to_lowercase())
        }
    }
}

/// Presentation defaults for a searchable list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListConfig {
    /// Hint shown in an empty search box.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Message shown in place of the list when nothing survives filtering.
    #[serde(default = "default_empty_message")]
    pub empty_message: String,
}

fn default_placeholder() -> String {
    "Search...".to_string()
}

fn default_empty_message() -> String {
    "No results found".to_string()
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            empty_message: default_empty_message(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_search_state_default_is_blank() {
        let state = SearchState::default();
        assert!(state.is_blank());
        assert_eq!(state.needle(), None);
    }

    #[test]
    fn test_search_state_whitespace_is_blank() {
        assert!(SearchState::new("   \t").is_blank());
    }

    #[test]
    fn test_search_state_needle_lowercases() {
        assert_eq!(SearchState::new("SeCuR").needle().as_deref(), Some("secur"));
    }

    #[test]
    fn test_search_state_needle_keeps_inner_whitespace() {
        assert_eq!(
            SearchState::new(" Code ").needle().as_deref(),
            Some(" code ")
        );
    }

    #[test]
    fn test_list_config_default() {
        let config = ListConfig::default();
        assert_eq!(config.placeholder, "Search...");
        assert_eq!(config.empty_message, "No results found");
    }

    #[test]
    fn test_list_config_deserialization_with_defaults() {
        let json = r#"{"placeholder": "Search templates..."}"#;
        let config: ListConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.placeholder, "Search templates...");
        assert_eq!(config.empty_message, "No results found");
    }
}
