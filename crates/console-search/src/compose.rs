//! Category-scoped search: the full listing pipeline.
//!
//! [`FilterableList`] puts a [`CategoryTabs`] control in front of a
//! [`SearchableList`]: the active category narrows the candidate pool first,
//! then the query narrows it further.
//!
//! ```text
//! items ──► filter_by_category(key, active) ──► search(keys, query) ──► projector
//! ```
//!
//! Category and query are independent state. Switching category keeps the
//! query, which re-applies to the new pool; editing the query keeps the
//! category. The derived list is recomputed from scratch on every call, so
//! the result depends only on the final (category, query) pair.
//!
//! Listings that only search leave the category scope out; listings that
//! only filter by category never set a query. Both are the same type.

use std::fmt;

use console_core::Record;

use crate::category::{CategoryTabs, filter_by_category};
use crate::filtered::Filtered;
use crate::list::{ListView, SearchableList};

/// The field a listing filters on, plus the tags that select its value.
struct CategoryScope<K> {
    key: K,
    tabs: CategoryTabs,
}

/// A searchable list with an optional category filter in front of it.
pub struct FilterableList<T: Record, P> {
    category: Option<CategoryScope<T::Key>>,
    list: SearchableList<T, P>,
}

impl<T, P> fmt::Debug for FilterableList<T, P>
where
    T: Record,
    T::Key: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("FilterableList");
        if let Some(scope) = &self.category {
            s.field("category_key", &scope.key)
                .field("active", &scope.tabs.active().selected);
        }
        s.field("list", &self.list).finish()
    }
}

impl<T: Record, P> FilterableList<T, P> {
    /// Wrap a searchable list with no category filter.
    pub fn new(list: SearchableList<T, P>) -> Self {
        Self {
            category: None,
            list,
        }
    }

    /// Filter on the `key` field, selected through `tabs`.
    pub fn with_category(mut self, key: T::Key, tabs: CategoryTabs) -> Self {
        self.category = Some(CategoryScope { key, tabs });
        self
    }

    /// Override the message shown when nothing survives either stage.
    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.list = self.list.with_empty_message(message);
        self
    }

    /// The category control, when this listing has one.
    pub fn tabs(&self) -> Option<&CategoryTabs> {
        self.category.as_ref().map(|scope| &scope.tabs)
    }

    /// The wrapped searchable list.
    pub fn list(&self) -> &SearchableList<T, P> {
        &self.list
    }

    /// Change the active category. Returns `true` if the selection changed.
    ///
    /// The query is left as it is. Without a category scope this does
    /// nothing and returns `false`.
    pub fn select_category(&mut self, id: impl Into<String>) -> bool {
        match &mut self.category {
            Some(scope) => scope.tabs.select(id),
            None => {
                log::warn!("select_category called on a listing without categories");
                false
            }
        }
    }

    /// Replace the query. The category is left as it is.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.list.set_query(query);
    }

    /// Reset the query to empty.
    pub fn clear_query(&mut self) {
        self.list.clear_query();
    }

    /// Items passing the active category only.
    ///
    /// This is the pool the search runs over.
    pub fn pool<'a>(&self, items: &'a [T]) -> Filtered<'a, T> {
        let all = Filtered::all(items);
        match &self.category {
            Some(scope) => filter_by_category(all, &scope.key, scope.tabs.active()),
            None => all,
        }
    }

    /// Items passing both the active category and the query.
    pub fn effective<'a>(&self, items: &'a [T]) -> Filtered<'a, T> {
        let result = self.list.filter(self.pool(items));
        log::debug!(
            "listing: category={:?}, query={:?}, showing {}/{}",
            self.tabs().map(|t| t.active().selected.as_str()),
            self.list.query(),
            result.len(),
            items.len()
        );
        result
    }

    /// Filter `items` through both stages and project the survivors.
    pub fn render<R>(&self, items: &[T]) -> ListView<R>
    where
        P: Fn(&T) -> R,
    {
        self.list.project(self.effective(items))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Filter;
    use crate::list::Keyed;
    use console_core::{FieldValue, RecordId};

    struct Template {
        id: u32,
        name: &'static str,
        category: &'static str,
    }

    #[derive(Debug)]
    enum Field {
        Name,
        Category,
    }

    impl Record for Template {
        type Key = Field;

        fn id(&self) -> RecordId {
            RecordId::from(self.id)
        }

        fn field(&self, key: &Field) -> Option<FieldValue<'_>> {
            Some(FieldValue::Text(match key {
                Field::Name => self.name,
                Field::Category => self.category,
            }))
        }
    }

    fn templates() -> Vec<Template> {
        vec![
            Template {
                id: 1,
                name: "Insurance Claims ML Pipeline",
                category: "Machine Learning",
            },
            Template {
                id: 2,
                name: "Customer Analytics Platform",
                category: "Analytics",
            },
            Template {
                id: 3,
                name: "Secure Data Lake",
                category: "Data Engineering",
            },
            Template {
                id: 4,
                name: "Risk Assessment API",
                category: "API Services",
            },
            Template {
                id: 5,
                name: "AI-Powered Chatbot Platform",
                category: "AI/ML",
            },
        ]
    }

    fn page() -> FilterableList<Template, impl Fn(&Template) -> &'static str> {
        let list = SearchableList::<Template, _>::new(
            vec![Field::Name, Field::Category],
            |t: &Template| t.name,
        )
        .with_placeholder("Search templates...");
        let tabs = CategoryTabs::new(Filter::from_labels([
            "All",
            "Machine Learning",
            "Analytics",
            "Data Engineering",
            "API Services",
            "AI/ML",
        ]));
        FilterableList::new(list).with_category(Field::Category, tabs)
    }

    fn ids(view: &Filtered<'_, Template>) -> Vec<u32> {
        view.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_initial_state_shows_everything() {
        let items = templates();
        let page = page();
        let view = page.effective(&items);
        assert!(view.is_unfiltered());
        assert_eq!(view.len(), 5);
    }

    #[test]
    fn test_category_then_search() {
        let items = templates();
        let mut page = page();
        page.select_category("Analytics");
        page.set_query("platform");
        assert_eq!(ids(&page.effective(&items)), vec![2]);
    }

    #[test]
    fn test_query_survives_category_switch() {
        let items = templates();
        let mut page = page();
        page.set_query("platform");
        assert_eq!(ids(&page.effective(&items)), vec![2, 5]);

        page.select_category("AI/ML");
        assert_eq!(page.list().query(), "platform");
        assert_eq!(ids(&page.effective(&items)), vec![5]);
    }

    #[test]
    fn test_category_survives_query_change() {
        let items = templates();
        let mut page = page();
        page.select_category("Data Engineering");
        page.set_query("secure");
        page.clear_query();
        assert_eq!(
            page.tabs().map(|t| t.active().selected.as_str()),
            Some("Data Engineering")
        );
        assert_eq!(ids(&page.effective(&items)), vec![3]);
    }

    #[test]
    fn test_final_pair_determines_result() {
        let items = templates();

        let mut a = page();
        a.select_category("AI/ML");
        a.set_query("chat");

        let mut b = page();
        b.set_query("risk");
        b.select_category("Analytics");
        b.set_query("chat");
        b.select_category("AI/ML");

        assert_eq!(ids(&a.effective(&items)), ids(&b.effective(&items)));
    }

    #[test]
    fn test_pool_ignores_query() {
        let items = templates();
        let mut page = page();
        page.select_category("Analytics");
        page.set_query("zzz");
        assert_eq!(ids(&page.pool(&items)), vec![2]);
        assert!(page.effective(&items).is_empty());
    }

    #[test]
    fn test_render_empty_message_on_no_match() {
        let items = templates();
        let mut page = page();
        page.select_category("AI/ML");
        page.set_query("secur");
        assert_eq!(
            page.render(&items),
            ListView::Empty {
                message: "No results found".to_string()
            }
        );
    }

    #[test]
    fn test_render_projects_effective_items() {
        let items = templates();
        let mut page = page();
        page.set_query("platform");
        let expected: Vec<RecordId> = page.effective(&items).iter().map(|t| t.id()).collect();
        assert_eq!(page.render(&items).keys(), expected.iter().collect::<Vec<_>>());

        page.select_category("AI/ML");
        assert_eq!(
            page.render(&items),
            ListView::Items(vec![Keyed {
                key: RecordId::from(5u32),
                unit: "AI-Powered Chatbot Platform",
            }])
        );
    }

    #[test]
    fn test_search_only_listing() {
        let items = templates();
        let list = SearchableList::<Template, _>::new(vec![Field::Name], |t: &Template| t.id);
        let mut page = FilterableList::new(list);
        assert!(page.tabs().is_none());
        assert!(!page.select_category("AI/ML"));
        page.set_query("data");
        assert_eq!(ids(&page.effective(&items)), vec![3]);
    }

    #[test]
    fn test_category_only_listing() {
        let items = templates();
        let list = SearchableList::<Template, _>::new(Vec::new(), |t: &Template| t.id);
        let tabs = CategoryTabs::new(Filter::from_labels(["All", "API Services"]));
        let mut page = FilterableList::new(list).with_category(Field::Category, tabs);
        page.select_category("API Services");
        assert_eq!(ids(&page.effective(&items)), vec![4]);
    }

    #[test]
    fn test_debug_includes_active_category() {
        let mut page = page();
        page.select_category("AI/ML");
        let rendered = format!("{page:?}");
        assert!(rendered.contains("AI/ML"));
    }
}
