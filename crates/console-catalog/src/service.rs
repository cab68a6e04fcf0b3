//! Service catalog entries.
//!
//! Catalog payloads come from a live endpoint and may omit anything but the
//! id and name, so every other field is optional. Rendering fills the gaps
//! with [`DEFAULT_OWNER`], [`DEFAULT_SLO`], and a healthy badge.

use std::fmt;
use std::str::FromStr;

use console_core::{Error, FieldValue, Number, Record, RecordId};
use console_search::{CategoryTabs, FilterableList, SearchableList};
use serde::{Deserialize, Serialize};

use crate::status::StatusKind;
use crate::tally::tally;

/// Owner shown when a service has none.
pub const DEFAULT_OWNER: &str = "Unknown";

/// SLO target (percent) shown when a service has none.
pub const DEFAULT_SLO: f64 = 99.9;

// ============================================================================
// Maturity / Health
// ============================================================================

/// Release maturity of a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Maturity {
    /// Serving production traffic.
    Production,
    /// Stable API, lower traffic.
    Stable,
    /// Still changing.
    Beta,
    /// Scheduled for removal.
    Deprecated,
}

impl Maturity {
    /// Every maturity, most mature first.
    pub const ALL: [Maturity; 4] = [
        Maturity::Production,
        Maturity::Stable,
        Maturity::Beta,
        Maturity::Deprecated,
    ];

    /// Wire name, also the category id.
    pub fn as_str(self) -> &'static str {
        match self {
            Maturity::Production => "production",
            Maturity::Stable => "stable",
            Maturity::Beta => "beta",
            Maturity::Deprecated => "deprecated",
        }
    }

    /// Badge text.
    pub fn label(self) -> &'static str {
        match self {
            Maturity::Production => "Production",
            Maturity::Stable => "Stable",
            Maturity::Beta => "Beta",
            Maturity::Deprecated => "Deprecated",
        }
    }
}

impl fmt::Display for Maturity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Maturity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Maturity::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::payload(format!("unknown maturity '{s}'")))
    }
}

/// Health of a running service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Health {
    /// Within SLO.
    #[default]
    Healthy,
    /// Degraded.
    Warning,
}

impl Health {
    /// Wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Health::Healthy => "healthy",
            Health::Warning => "warning",
        }
    }
}

impl From<Health> for StatusKind {
    fn from(health: Health) -> Self {
        match health {
            Health::Healthy => StatusKind::Healthy,
            Health::Warning => StatusKind::Warning,
        }
    }
}

// ============================================================================
// Service
// ============================================================================

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    /// Identifier; numeric in the literal catalog, `svc1`-style from the API.
    pub id: RecordId,
    /// Display name.
    pub name: String,
    /// One-line summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Owning team.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Release maturity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maturity: Option<Maturity>,
    /// Released version, e.g. `v2.4.1`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Upstream service count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<u32>,
    /// Downstream service count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumers: Option<u32>,
    /// Reported health.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<Health>,
    /// Whether API docs are published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_docs: Option<bool>,
    /// SLO target in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slo: Option<f64>,
}

impl Service {
    /// Owner, or [`DEFAULT_OWNER`].
    pub fn owner_or_default(&self) -> &str {
        self.owner.as_deref().unwrap_or(DEFAULT_OWNER)
    }

    /// SLO target, or [`DEFAULT_SLO`].
    pub fn slo_or_default(&self) -> f64 {
        self.slo.unwrap_or(DEFAULT_SLO)
    }

    /// Health for the badge. Anything not reported as a warning is healthy.
    pub fn effective_health(&self) -> Health {
        self.health.unwrap_or_default()
    }
}

/// Addressable fields of a [`Service`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceField {
    /// `name`
    Name,
    /// `description`
    Description,
    /// `owner`
    Owner,
    /// `maturity`
    Maturity,
    /// `version`
    Version,
    /// `dependencies`
    Dependencies,
    /// `consumers`
    Consumers,
    /// `health`, with absent health reported as healthy
    Health,
    /// `apiDocs` (a boolean, never matched)
    ApiDocs,
    /// `slo`
    Slo,
}

impl ServiceField {
    /// Fields the catalog search box looks at.
    pub const SEARCH_KEYS: [ServiceField; 3] =
        [ServiceField::Name, ServiceField::Owner, ServiceField::Description];
}

impl Record for Service {
    type Key = ServiceField;

    fn id(&self) -> RecordId {
        self.id.clone()
    }

    fn field(&self, key: &ServiceField) -> Option<FieldValue<'_>> {
        match key {
            ServiceField::Name => Some(FieldValue::Text(&self.name)),
            ServiceField::Description => self.description.as_deref().map(FieldValue::Text),
            ServiceField::Owner => self.owner.as_deref().map(FieldValue::Text),
            ServiceField::Maturity => self.maturity.map(|m| FieldValue::Text(m.as_str())),
            ServiceField::Version => self.version.as_deref().map(FieldValue::Text),
            ServiceField::Dependencies => self
                .dependencies
                .map(|n| FieldValue::Number(Number::from(n))),
            ServiceField::Consumers => self.consumers.map(|n| FieldValue::Number(Number::from(n))),
            ServiceField::Health => Some(FieldValue::Text(self.effective_health().as_str())),
            ServiceField::ApiDocs => self.api_docs.map(|_| FieldValue::Other),
            ServiceField::Slo => self.slo.map(|n| FieldValue::Number(Number::from(n))),
        }
    }
}

/// The catalog listing: search only.
pub fn listing<P>(projector: P) -> FilterableList<Service, P> {
    let list = SearchableList::<Service, P>::new(ServiceField::SEARCH_KEYS.to_vec(), projector)
        .with_placeholder("Search services by name, owner, or description...");
    FilterableList::new(list)
}

/// The catalog listing scoped by maturity, with tags tallied from `items`
/// and labelled the way the badges read.
pub fn listing_by_maturity<P>(items: &[Service], projector: P) -> FilterableList<Service, P> {
    let filters = tally(items, &ServiceField::Maturity)
        .into_iter()
        .map(|filter| match filter.id.parse::<Maturity>() {
            Ok(maturity) => filter.with_label(maturity.label()),
            Err(_) => filter,
        })
        .collect();
    listing(projector).with_category(ServiceField::Maturity, CategoryTabs::new(filters))
}

// ============================================================================
// Tests
// ============================================================================
