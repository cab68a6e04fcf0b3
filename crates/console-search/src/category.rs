//! Category tags and the single-select control over them.
//!
//! A [`Filter`] is one selectable tag; [`CategoryTabs`] holds the tags of one
//! listing together with the currently active tag. The sentinel id
//! [`ALL_FILTER_ID`] means "no category restriction".
//!
//! Count badges on tags are supplied by the caller and shown as-is. The
//! control never recounts, so keeping counts in step with the data is the
//! caller's job.

use console_core::{FieldValue, Record};
use serde::{Deserialize, Serialize};

use crate::filtered::Filtered;

/// Id of the tag that selects every category.
pub const ALL_FILTER_ID: &str = "All";

// ============================================================================
// Filter
// ============================================================================

/// A selectable category tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    /// Compared for equality against an item's category field.
    pub id: String,

    /// Text shown on the tag.
    pub label: String,

    /// Optional informational count badge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl Filter {
    /// A tag whose label is its id.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            count: None,
        }
    }

    /// Attach a count badge.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    /// Override the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Build count-less tags from plain category names.
    pub fn from_labels<I, S>(labels: I) -> Vec<Filter>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        labels.into_iter().map(Filter::new).collect()
    }
}

// ============================================================================
// ActiveFilter
// ============================================================================

/// The currently selected tag of one listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveFilter {
    /// Selected tag id.
    pub selected: String,
}

impl Default for ActiveFilter {
    fn default() -> Self {
        Self {
            selected: ALL_FILTER_ID.to_string(),
        }
    }
}

impl ActiveFilter {
    /// Select `id`.
    pub fn new(id: impl Into<String>) -> Self {
        Self { selected: id.into() }
    }

    /// `true` when no category restriction applies.
    pub fn is_all(&self) -> bool {
        self.selected == ALL_FILTER_ID
    }
}

// ============================================================================
// filter_by_category
// ============================================================================

/// Narrow `items` to those whose `key` field equals the active category.
///
/// The "All" selection returns `items` unchanged. A textual field must equal
/// the selected id exactly; a numeric field matches when its decimal
/// rendering does. Absent and non-primitive fields never match, and an id
/// no item carries simply yields an empty view.
pub fn filter_by_category<'a, T: Record>(
    items: Filtered<'a, T>,
    key: &T::Key,
    active: &ActiveFilter,
) -> Filtered<'a, T> {
    if active.is_all() {
        return items;
    }

    let wanted = active.selected.as_str();
    items.retain(|item| match item.field(key) {
        Some(FieldValue::Text(text)) => text == wanted,
        Some(FieldValue::Number(n)) => n.to_string() == wanted,
        Some(FieldValue::Other) | None => false,
    })
}

// ============================================================================
// CategoryTabs
// ============================================================================

/// Render-ready view of one tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tab<'a> {
    /// Tag id.
    pub id: &'a str,
    /// Tag label.
    pub label: &'a str,
    /// Count badge, when the caller supplied one.
    pub count: Option<usize>,
    /// Whether this is the selected tag.
    pub active: bool,
}

/// A set of mutually exclusive category tags with one active selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTabs {
    filters: Vec<Filter>,
    active: ActiveFilter,
}

impl CategoryTabs {
    /// Create tags with "All" selected.
    pub fn new(filters: Vec<Filter>) -> Self {
        Self {
            filters,
            active: ActiveFilter::default(),
        }
    }

    /// Start with `id` selected instead of "All".
    pub fn with_active(mut self, id: impl Into<String>) -> Self {
        self.active = ActiveFilter::new(id);
        self
    }

    /// The tags, in display order.
    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// The active selection.
    pub fn active(&self) -> &ActiveFilter {
        &self.active
    }

    /// Make `id` the active tag. Returns `true` if the selection changed.
    ///
    /// Any id is accepted, including ones with no tag.
    pub fn select(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.active.selected == id {
            return false;
        }
        log::trace!("category: {} -> {}", self.active.selected, id);
        self.active.selected = id;
        true
    }

    /// Select `id` and report the new selection to `on_filter_change`.
    ///
    /// The handler runs for every selection, including re-selecting the
    /// tag that is already active.
    pub fn select_with(&mut self, id: impl Into<String>, on_filter_change: impl FnOnce(&str)) {
        self.select(id);
        on_filter_change(&self.active.selected);
    }

    /// One render-ready view per tag, in display order.
    pub fn tabs(&self) -> impl Iterator<Item = Tab<'_>> + '_ {
        self.filters.iter().map(|filter| Tab {
            id: &filter.id,
            label: &filter.label,
            count: filter.count,
            active: filter.id == self.active.selected,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
