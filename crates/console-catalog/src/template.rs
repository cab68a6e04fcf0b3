//! Template marketplace entries.

use console_core::{FieldValue, Number, Record, RecordId};
use console_search::{CategoryTabs, Filter, FilterableList, SearchableList};
use serde::{Deserialize, Serialize};

use crate::fixtures;

/// An industry blueprint offered in the template marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// One-paragraph summary.
    pub description: String,
    /// Marketplace category.
    pub category: String,
    /// Times used.
    pub downloads: u32,
    /// Average rating out of 5.
    pub rating: f64,
    /// Feature highlights.
    #[serde(default)]
    pub features: Vec<String>,
    /// Monthly cost range, e.g. `$8-12k/mo`.
    pub estimated_cost: String,
}

/// Addressable fields of a [`Template`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateField {
    /// `name`
    Name,
    /// `description`
    Description,
    /// `category`
    Category,
    /// `downloads`
    Downloads,
    /// `rating`
    Rating,
    /// `features` (a list, never matched)
    Features,
    /// `estimatedCost`
    EstimatedCost,
}

impl TemplateField {
    /// Fields the marketplace search box looks at.
    pub const SEARCH_KEYS: [TemplateField; 3] = [
        TemplateField::Name,
        TemplateField::Description,
        TemplateField::Category,
    ];
}

impl Record for Template {
    type Key = TemplateField;

    fn id(&self) -> RecordId {
        RecordId::from(self.id)
    }

    fn field(&self, key: &TemplateField) -> Option<FieldValue<'_>> {
        Some(match key {
            TemplateField::Name => FieldValue::Text(&self.name),
            TemplateField::Description => FieldValue::Text(&self.description),
            TemplateField::Category => FieldValue::Text(&self.category),
            TemplateField::Downloads => FieldValue::Number(Number::from(self.downloads)),
            TemplateField::Rating => FieldValue::Number(Number::from(self.rating)),
            TemplateField::Features => FieldValue::Other,
            TemplateField::EstimatedCost => FieldValue::Text(&self.estimated_cost),
        })
    }
}

/// The marketplace listing: category tags with counts, then search over
/// name, description, and category.
pub fn listing<P>(projector: P) -> FilterableList<Template, P> {
    listing_with_filters(fixtures::template_filters(), projector)
}

/// The marketplace listing with caller-supplied category tags, for data
/// other than the built-in marketplace.
pub fn listing_with_filters<P>(filters: Vec<Filter>, projector: P) -> FilterableList<Template, P> {
    let list = SearchableList::<Template, P>::new(TemplateField::SEARCH_KEYS.to_vec(), projector)
        .with_placeholder("Search templates...");
    FilterableList::new(list).with_category(TemplateField::Category, CategoryTabs::new(filters))
}
