//! In-memory search and category filtering for console listings.
//!
//! Every listing page (templates, extensions, projects, services) follows the
//! same flow, which this crate provides once, generically over the item type
//! and the projector that turns an item into something displayable.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      console-search                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  items ──► filter_by_category ──► search ──► projector      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Filtered          (borrowed view; identity when unfiltered)│
//! │  matcher           (case-insensitive substring predicates)  │
//! │  CategoryTabs      (single-select tag control)              │
//! │  SearchableList    (query state + projection)               │
//! │  FilterableList    (category scope + searchable list)       │
//! │  ListConfig        (placeholder / empty message defaults)   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Filtering is total: a query that matches nothing, a key an item lacks,
//! or a category no item carries all produce an empty result, never an
//! error.
//!
//! # Example
//!
//! ```rust
//! use console_core::JsonRecord;
//! use console_search::{CategoryTabs, Filter, FilterableList, ListView, SearchableList};
//! use serde_json::json;
//!
//! let items: Vec<JsonRecord> = vec![
//!     json!({"id": 1, "name": "Advanced Security Scanner", "category": "Security"}),
//!     json!({"id": 2, "name": "AI Code Assistant", "category": "AI/ML"}),
//! ]
//! .into_iter()
//! .enumerate()
//! .map(|(i, v)| JsonRecord::from_value(v, i).unwrap())
//! .collect();
//!
//! let keys = vec!["name".to_string(), "category".to_string()];
//! let list = SearchableList::<JsonRecord, _>::new(keys, |r: &JsonRecord| {
//!     r.get("name").and_then(|v| v.as_str()).unwrap_or_default().to_string()
//! });
//! let tabs = CategoryTabs::new(Filter::from_labels(["All", "Security", "AI/ML"]));
//! let mut page = FilterableList::new(list).with_category("category".to_string(), tabs);
//!
//! page.set_query("secur");
//! assert_eq!(page.effective(&items).len(), 1);
//!
//! page.select_category("AI/ML");
//! assert!(matches!(page.render(&items), ListView::Empty { .. }));
//! ```

pub mod category;
pub mod compose;
pub mod filtered;
pub mod list;
pub mod matcher;
pub mod types;

mod proptests;

// Re-exports
pub use category::{ActiveFilter, ALL_FILTER_ID, CategoryTabs, Filter, Tab, filter_by_category};
pub use compose::FilterableList;
pub use filtered::Filtered;
pub use list::{Keyed, ListView, SearchableList};
pub use matcher::{matches_any, matches_value, search};
pub use types::{ListConfig, SearchState};
