//! Category tags derived from the data.
//!
//! The category control never counts anything itself. Listings that want
//! count badges either hard-code them (the template marketplace does) or
//! derive them once with [`tally`].

use console_core::{FieldValue, Record};
use console_search::{ALL_FILTER_ID, Filter};

/// Builds category tags for the `key` field of `items`.
///
/// The first tag is [`ALL_FILTER_ID`] with the total item count. Then one
/// tag per distinct value, in first-seen order, with the number of items
/// carrying it. Text values are used as-is and numbers by their decimal
/// rendering; items without a primitive value under `key` only count
/// towards the total.
pub fn tally<T: Record>(items: &[T], key: &T::Key) -> Vec<Filter> {
    let mut values: Vec<(String, usize)> = Vec::new();
    for item in items {
        let value = match item.field(key) {
            Some(FieldValue::Text(s)) => s.to_string(),
            Some(FieldValue::Number(n)) => n.to_string(),
            Some(FieldValue::Other) | None => continue,
        };
        match values.iter_mut().find(|(v, _)| *v == value) {
            Some((_, count)) => *count += 1,
            None => values.push((value, 1)),
        }
    }

    log::debug!("tally: {} distinct values over {} items", values.len(), items.len());

    std::iter::once(Filter::new(ALL_FILTER_ID).with_count(items.len()))
        .chain(
            values
                .into_iter()
                .map(|(value, count)| Filter::new(value).with_count(count)),
        )
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extension::ExtensionField;
    use crate::fixtures;
    use crate::template::TemplateField;

    fn summary(filters: &[Filter]) -> Vec<(&str, Option<usize>)> {
        filters.iter().map(|f| (f.id.as_str(), f.count)).collect()
    }

    #[test]
    fn test_tally_matches_fixed_template_counts() {
        let derived = tally(&fixtures::templates(), &TemplateField::Category);
        assert_eq!(derived, fixtures::template_filters());
    }

    #[test]
    fn test_tally_first_seen_order() {
        let derived = tally(&fixtures::services(), &crate::service::ServiceField::Maturity);
        assert_eq!(
            summary(&derived),
            vec![
                ("All", Some(6)),
                ("production", Some(3)),
                ("stable", Some(1)),
                ("beta", Some(1)),
                ("deprecated", Some(1)),
            ]
        );
    }

    #[test]
    fn test_tally_numbers_use_decimal_rendering() {
        let derived = tally(&fixtures::extensions(), &ExtensionField::Rating);
        let ids: Vec<&str> = derived.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["All", "4.9", "4.7", "4.8", "4.6", "4.5"]);
    }

    #[test]
    fn test_tally_skips_other_values() {
        let derived = tally(&fixtures::extensions(), &ExtensionField::Installed);
        assert_eq!(summary(&derived), vec![("All", Some(6))]);
    }

    #[test]
    fn test_tally_empty() {
        let derived = tally::<crate::Template>(&[], &TemplateField::Category);
        assert_eq!(summary(&derived), vec![("All", Some(0))]);
    }
}
