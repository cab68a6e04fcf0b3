//! Extensions marketplace entries.

use console_core::{FieldValue, Number, Record, RecordId};
use console_search::{CategoryTabs, Filter, FilterableList, SearchableList};
use serde::{Deserialize, Serialize};

/// Category tags of the extensions marketplace, in display order.
pub const CATEGORIES: [&str; 7] = [
    "All",
    "Security",
    "Deployment",
    "AI/ML",
    "Database",
    "Governance",
    "API",
];

/// A plugin that extends the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extension {
    /// Identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// One-paragraph summary.
    pub description: String,
    /// Marketplace category.
    pub category: String,
    /// Install count.
    pub downloads: u32,
    /// Average rating out of 5.
    pub rating: f64,
    /// Whether it is installed on this platform.
    #[serde(default)]
    pub installed: bool,
    /// Owning team.
    pub developer: String,
    /// Released version.
    pub version: String,
}

/// Addressable fields of an [`Extension`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtensionField {
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
    /// `installed` (a boolean, never matched)
    Installed,
    /// `developer`
    Developer,
    /// `version`
    Version,
}

impl ExtensionField {
    /// Fields the marketplace search box looks at.
    pub const SEARCH_KEYS: [ExtensionField; 4] = [
        ExtensionField::Name,
        ExtensionField::Description,
        ExtensionField::Category,
        ExtensionField::Downloads,
    ];
}

impl Record for Extension {
    type Key = ExtensionField;

    fn id(&self) -> RecordId {
        RecordId::from(self.id)
    }

    fn field(&self, key: &ExtensionField) -> Option<FieldValue<'_>> {
        Some(match key {
            ExtensionField::Name => FieldValue::Text(&self.name),
            ExtensionField::Description => FieldValue::Text(&self.description),
            ExtensionField::Category => FieldValue::Text(&self.category),
            ExtensionField::Downloads => FieldValue::Number(Number::from(self.downloads)),
            ExtensionField::Rating => FieldValue::Number(Number::from(self.rating)),
            ExtensionField::Installed => FieldValue::Other,
            ExtensionField::Developer => FieldValue::Text(&self.developer),
            ExtensionField::Version => FieldValue::Text(&self.version),
        })
    }
}

/// The marketplace listing: count-less category pills plus search.
pub fn listing<P>(projector: P) -> FilterableList<Extension, P> {
    let list =
        SearchableList::<Extension, P>::new(ExtensionField::SEARCH_KEYS.to_vec(), projector)
            .with_placeholder("Search extensions...");
    FilterableList::new(list).with_category(
        ExtensionField::Category,
        CategoryTabs::new(Filter::from_labels(CATEGORIES)),
    )
}
