//! The searchable list: query state plus projection.
//!
//! A [`SearchableList`] owns its [`SearchState`], the keys eligible for
//! matching, and a projector that turns one item into a displayable unit.
//! Items are not owned: like props, they are handed in on every render, and
//! the list never mutates them.

use std::fmt;

use console_core::{Record, RecordId};

use crate::filtered::Filtered;
use crate::matcher;
use crate::types::{ListConfig, SearchState};

/// A projected unit tagged with its item's id, for stable keying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyed<R> {
    /// Id of the item the unit was projected from.
    pub key: RecordId,
    /// The projector's output.
    pub unit: R,
}

/// The outcome of rendering a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView<R> {
    /// Nothing survived filtering; show the message instead of the list.
    Empty {
        /// The list's empty message.
        message: String,
    },
    /// The projected survivors, in source order.
    Items(Vec<Keyed<R>>),
}

impl<R> ListView<R> {
    /// Number of rendered units (zero when empty).
    pub fn len(&self) -> usize {
        match self {
            ListView::Empty { .. } => 0,
            ListView::Items(units) => units.len(),
        }
    }

    /// `true` when the empty message is shown.
    pub fn is_empty(&self) -> bool {
        matches!(self, ListView::Empty { .. })
    }

    /// The render keys, in order.
    pub fn keys(&self) -> Vec<&RecordId> {
        match self {
            ListView::Empty { .. } => Vec::new(),
            ListView::Items(units) => units.iter().map(|k| &k.key).collect(),
        }
    }
}

/// Generic substring search over a caller-supplied item collection.
pub struct SearchableList<T: Record, P> {
    search_keys: Vec<T::Key>,
    projector: P,
    config: ListConfig,
    state: SearchState,
}

impl<T, P> fmt::Debug for SearchableList<T, P>
where
    T: Record,
    T::Key: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchableList")
            .field("search_keys", &self.search_keys)
            .field("config", &self.config)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<T: Record, P> SearchableList<T, P> {
    /// Create a list searching `search_keys` and rendering with `projector`.
    ///
    /// Starts with an empty query and the default placeholder and empty
    /// message.
    pub fn new(search_keys: Vec<T::Key>, projector: P) -> Self {
        Self {
            search_keys,
            projector,
            config: ListConfig::default(),
            state: SearchState::default(),
        }
    }

    /// Override the search box hint.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.config.placeholder = placeholder.into();
        self
    }

    /// Override the message shown when nothing matches.
    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.config.empty_message = message.into();
        self
    }

    /// Replace both presentation strings at once.
    pub fn with_config(mut self, config: ListConfig) -> Self {
        self.config = config;
        self
    }

    /// The search box hint.
    pub fn placeholder(&self) -> &str {
        &self.config.placeholder
    }

    /// The empty-result message.
    pub fn empty_message(&self) -> &str {
        &self.config.empty_message
    }

    /// The keys eligible for matching.
    pub fn search_keys(&self) -> &[T::Key] {
        &self.search_keys
    }

    /// The current query, exactly as typed.
    pub fn query(&self) -> &str {
        &self.state.query
    }

    /// Replace the query (a keystroke in the search box).
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.query = query.into();
    }

    /// Reset the query to empty.
    pub fn clear_query(&mut self) {
        self.state = SearchState::default();
    }

    /// Apply the current query to `items`.
    pub fn filter<'a>(&self, items: Filtered<'a, T>) -> Filtered<'a, T> {
        matcher::search(items, &self.search_keys, &self.state)
    }

    /// Filter `items` and project the survivors.
    pub fn render<'a, R>(&self, items: Filtered<'a, T>) -> ListView<R>
    where
        P: Fn(&T) -> R,
    {
        self.project(self.filter(items))
    }

    /// Project already-filtered items, or the empty message if none survived.
    pub fn project<R>(&self, survivors: Filtered<'_, T>) -> ListView<R>
    where
        P: Fn(&T) -> R,
    {
        if survivors.is_empty() {
            return ListView::Empty {
                message: self.config.empty_message.clone(),
            };
        }
        ListView::Items(
            survivors
                .iter()
                .map(|item| Keyed {
                    key: item.id(),
                    unit: (self.projector)(item),
                })
                .collect(),
        )
    }

    /// Shorthand for rendering a whole slice.
    pub fn render_slice<R>(&self, items: &[T]) -> ListView<R>
    where
        P: Fn(&T) -> R,
    {
        self.render(Filtered::all(items))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use console_core::{FieldValue, Number};

    #[derive(Debug)]
    struct Project {
        id: u32,
        name: &'static str,
        team: &'static str,
        cost: u32,
    }

    #[derive(Debug)]
    enum Field {
        Name,
        Team,
        Cost,
    }

    impl Record for Project {
        type Key = Field;

        fn id(&self) -> RecordId {
            RecordId::from(self.id)
        }

        fn field(&self, key: &Field) -> Option<FieldValue<'_>> {
            Some(match key {
                Field::Name => FieldValue::Text(self.name),
                Field::Team => FieldValue::Text(self.team),
                Field::Cost => FieldValue::Number(Number::from(self.cost)),
            })
        }
    }

    fn projects() -> Vec<Project> {
        vec![
            Project {
                id: 1,
                name: "analytics-ml-prod",
                team: "Data Science",
                cost: 12450,
            },
            Project {
                id: 2,
                name: "customer-insights-dev",
                team: "Analytics",
                cost: 8200,
            },
            Project {
                id: 3,
                name: "risk-assessment-staging",
                team: "Risk Engineering",
                cost: 5600,
            },
        ]
    }

    fn list() -> SearchableList<Project, impl Fn(&Project) -> String> {
        SearchableList::new(vec![Field::Name, Field::Team], |p: &Project| p.name.to_uppercase())
    }

    #[test]
    fn test_defaults() {
        let list = list();
        assert_eq!(list.placeholder(), "Search...");
        assert_eq!(list.empty_message(), "No results found");
        assert_eq!(list.query(), "");
        assert_eq!(list.search_keys().len(), 2);
    }

    #[test]
    fn test_overrides() {
        let list = list()
            .with_placeholder("Search projects by name, team, or description...")
            .with_empty_message("No projects");
        assert!(list.placeholder().starts_with("Search projects"));
        assert_eq!(list.empty_message(), "No projects");
    }

    #[test]
    fn test_render_all_when_query_empty() {
        let items = projects();
        let view = list().render_slice(&items);
        assert_eq!(view.len(), 3);
        assert_eq!(
            view.keys(),
            vec![&RecordId::Number(1), &RecordId::Number(2), &RecordId::Number(3)]
        );
    }

    #[test]
    fn test_render_projects_units() {
        let items = projects();
        let mut list = list();
        list.set_query("risk");
        let ListView::Items(units) = list.render_slice(&items) else {
            unreachable!("expected items");
        };
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].key, RecordId::Number(3));
        assert_eq!(units[0].unit, "RISK-ASSESSMENT-STAGING");
    }

    #[test]
    fn test_or_across_keys() {
        let items = projects();
        let mut list = list();
        // "analytics" is in project 1's name and project 2's team
        list.set_query("Analytics");
        assert_eq!(
            list.render_slice(&items).keys(),
            vec![&RecordId::Number(1), &RecordId::Number(2)]
        );
    }

    #[test]
    fn test_render_empty_message() {
        let items = projects();
        let mut list = list().with_empty_message("Nothing here");
        list.set_query("mainframe");
        assert_eq!(
            list.render_slice(&items),
            ListView::Empty {
                message: "Nothing here".to_string()
            }
        );
    }

    #[test]
    fn test_unsearched_numeric_key_does_not_match() {
        let items = projects();
        let mut list = list();
        list.set_query("8200");
        assert!(list.render_slice(&items).is_empty());

        let mut by_cost = SearchableList::<Project, _>::new(vec![Field::Cost], |p: &Project| p.id);
        by_cost.set_query("8200");
        assert_eq!(by_cost.render_slice(&items).keys(), vec![&RecordId::Number(2)]);
    }

    #[test]
    fn test_clear_query_restores_identity() {
        let items = projects();
        let mut list = list();
        list.set_query("risk");
        assert!(!list.filter(Filtered::all(&items)).is_unfiltered());
        list.clear_query();
        assert!(list.filter(Filtered::all(&items)).is_unfiltered());
    }

    #[test]
    fn test_items_not_mutated() {
        let items = projects();
        let mut list = list();
        list.set_query("dev");
        let _ = list.render_slice(&items);
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].name, "analytics-ml-prod");
    }

    #[test]
    fn test_duplicate_ids_accepted() {
        let items = vec![
            Project {
                id: 7,
                name: "a",
                team: "x",
                cost: 1,
            },
            Project {
                id: 7,
                name: "b",
                team: "x",
                cost: 2,
            },
        ];
        let view = list().render_slice(&items);
        assert_eq!(view.keys(), vec![&RecordId::Number(7), &RecordId::Number(7)]);
    }

    #[test]
    fn test_debug_does_not_require_projector_debug() {
        let rendered = format!("{:?}", list());
        assert!(rendered.contains("SearchableList"));
    }
}
