//! Text-search predicates.
//!
//! Matching is a linear scan: for each item, each search key is tried in
//! order and the item survives as soon as one key matches.
//!
//! | Field value | Match rule |
//! |-------------|------------|
//! | Text        | lower-cased value contains the lower-cased query |
//! | Number      | decimal rendering contains the query |
//! | Other / absent | never matches |

use console_core::{FieldValue, Record};

use crate::filtered::Filtered;
use crate::types::SearchState;

/// Test one field value against an already lower-cased needle.
pub fn matches_value(value: &FieldValue<'_>, needle: &str) -> bool {
    match value {
        FieldValue::Text(text) => text.to_lowercase().contains(needle),
        FieldValue::Number(n) => n.to_string().contains(needle),
        FieldValue::Other => false,
    }
}

/// `true` when any of `keys` holds a value matching `needle`.
///
/// Keys the item does not have are skipped. With no keys nothing matches.
pub fn matches_any<T: Record>(item: &T, keys: &[T::Key], needle: &str) -> bool {
    keys.iter().any(|key| {
        item.field(key)
            .is_some_and(|value| matches_value(&value, needle))
    })
}

/// Narrow `items` to those matching `query` on any of `keys`.
///
/// A blank query returns `items` unchanged, so an unfiltered input stays
/// the caller's own slice.
pub fn search<'a, T: Record>(
    items: Filtered<'a, T>,
    keys: &[T::Key],
    query: &SearchState,
) -> Filtered<'a, T> {
    let Some(needle) = query.needle() else {
        return items;
    };

    let before = items.len();
    let result = items.retain(|item| matches_any(item, keys, &needle));
    log::debug!(
        "search: query={:?}, keys={}, matched {}/{}",
        query.query,
        keys.len(),
        result.len(),
        before
    );
    result
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use console_core::{Number, RecordId};

    struct Extension {
        id: u32,
        name: &'static str,
        category: &'static str,
        downloads: u32,
        installed: bool,
    }

    #[derive(Clone, Copy)]
    enum Field {
        Name,
        Category,
        Downloads,
        Installed,
        Developer,
    }

    impl Record for Extension {
        type Key = Field;

        fn id(&self) -> RecordId {
            RecordId::from(self.id)
        }

        fn field(&self, key: &Field) -> Option<FieldValue<'_>> {
            match key {
                Field::Name => Some(FieldValue::Text(self.name)),
                Field::Category => Some(FieldValue::Text(self.category)),
                Field::Downloads => Some(FieldValue::Number(Number::from(self.downloads))),
                Field::Installed => Some(FieldValue::Other),
                Field::Developer => None,
            }
        }
    }

    fn scanner() -> Extension {
        Extension {
            id: 1,
            name: "Advanced Security Scanner",
            category: "Security",
            downloads: 234,
            installed: true,
        }
    }

    fn catalog() -> Vec<Extension> {
        vec![
            scanner(),
            Extension {
                id: 2,
                name: "AI Code Assistant",
                category: "AI/ML",
                downloads: 412,
                installed: false,
            },
        ]
    }

    // ------------------------------------------------------------------------
    // matches_value
    // ------------------------------------------------------------------------

    #[test]
    fn test_text_match_is_case_insensitive() {
        assert!(matches_value(&FieldValue::Text("Advanced Security"), "secur"));
        assert!(!matches_value(&FieldValue::Text("Advanced Security"), "deploy"));
    }

    #[test]
    fn test_number_match_on_decimal_rendering() {
        let downloads = FieldValue::Number(Number::from(234u32));
        assert!(matches_value(&downloads, "23"));
        assert!(!matches_value(&downloads, "99"));
    }

    #[test]
    fn test_float_match() {
        let rating = FieldValue::Number(Number::from(4.8));
        assert!(matches_value(&rating, "4.8"));
        assert!(matches_value(&rating, ".8"));
    }

    #[test]
    fn test_other_never_matches() {
        assert!(!matches_value(&FieldValue::Other, "true"));
        assert!(!matches_value(&FieldValue::Other, ""));
    }

    // ------------------------------------------------------------------------
    // matches_any
    // ------------------------------------------------------------------------

    #[test]
    fn test_any_key_is_enough() {
        let ext = scanner();
        assert!(matches_any(&ext, &[Field::Name, Field::Category], "security"));
        assert!(matches_any(&ext, &[Field::Downloads, Field::Category], "secur"));
    }

    #[test]
    fn test_absent_key_is_non_matching() {
        let ext = scanner();
        assert!(!matches_any(&ext, &[Field::Developer], "platform"));
        assert!(matches_any(&ext, &[Field::Developer, Field::Name], "scanner"));
    }

    #[test]
    fn test_non_primitive_key_is_ignored() {
        let ext = scanner();
        assert!(ext.installed);
        assert!(!matches_any(&ext, &[Field::Installed], "true"));
    }

    #[test]
    fn test_no_keys_matches_nothing() {
        assert!(!matches_any(&scanner(), &[], "a"));
    }

    // ------------------------------------------------------------------------
    // search
    // ------------------------------------------------------------------------

    #[test]
    fn test_search_blank_query_is_identity() {
        let items = catalog();
        let result = search(Filtered::all(&items), &[Field::Name], &SearchState::new("  "));
        assert!(result.is_unfiltered());
        assert!(
            result
                .as_source()
                .is_some_and(|slice| std::ptr::eq(slice, items.as_slice()))
        );
    }

    #[test]
    fn test_search_filters_by_query() {
        let items = catalog();
        let result = search(
            Filtered::all(&items),
            &[Field::Name, Field::Category],
            &SearchState::new("secur"),
        );
        let ids: Vec<u32> = result.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_search_numeric_field() {
        let items = catalog();
        let keep = search(
            Filtered::all(&items),
            &[Field::Downloads],
            &SearchState::new("23"),
        );
        assert_eq!(keep.len(), 1);

        let none = search(
            Filtered::all(&items),
            &[Field::Downloads],
            &SearchState::new("99"),
        );
        assert!(none.is_empty());
    }

    #[test]
    fn test_search_mixed_case_query() {
        let items = catalog();
        let result = search(Filtered::all(&items), &[Field::Name], &SearchState::new("CODE"));
        let ids: Vec<u32> = result.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_search_padded_query_keeps_whitespace() {
        let items = catalog();
        // " code" matches "AI Code Assistant" but "code " does not
        let hit = search(Filtered::all(&items), &[Field::Name], &SearchState::new(" code"));
        assert_eq!(hit.len(), 1);
        let miss = search(Filtered::all(&items), &[Field::Name], &SearchState::new("code  "));
        assert!(miss.is_empty());
    }
}
