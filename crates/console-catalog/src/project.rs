//! Analytics environments listed on the projects page.

use std::fmt;

use console_core::{FieldValue, Number, Record, RecordId};
use console_search::{CategoryTabs, FilterableList, SearchableList};
use serde::{Deserialize, Serialize};

use crate::status::StatusKind;
use crate::tally::tally;

/// Lifecycle state of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    /// Deployed and serving.
    Active,
    /// Waiting on provisioning or approval.
    Pending,
}

impl ProjectStatus {
    /// Wire name, also the category id.
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Pending => "pending",
        }
    }
}

impl From<ProjectStatus> for StatusKind {
    fn from(status: ProjectStatus) -> Self {
        match status {
            ProjectStatus::Active => StatusKind::Healthy,
            ProjectStatus::Pending => StatusKind::Pending,
        }
    }
}

/// Support tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Highest.
    Gold,
    /// Middle.
    Silver,
    /// Lowest.
    Bronze,
}

impl Tier {
    /// Wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Gold => "gold",
            Tier::Silver => "silver",
            Tier::Bronze => "bronze",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scorecard, each out of 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityScores {
    /// Security posture.
    pub security: u8,
    /// Code quality.
    pub quality: u8,
    /// Runtime performance.
    pub performance: u8,
    /// Policy compliance.
    pub compliance: u8,
}

/// Delivery metrics, kept as the display strings the dashboard shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoraMetrics {
    /// e.g. `12/day`
    pub deployment_frequency: String,
    /// e.g. `45m`
    pub lead_time: String,
    /// Mean time to restore.
    pub mttr: String,
    /// e.g. `2.1%`
    pub change_failure_rate: String,
}

/// One analytics environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Identifier.
    pub id: u32,
    /// Environment name, e.g. `analytics-ml-prod`.
    pub name: String,
    /// One-line summary.
    pub description: String,
    /// Lifecycle state.
    pub status: ProjectStatus,
    /// Support tier.
    pub tier: Tier,
    /// Owning team.
    pub team: String,
    /// Relative time of the last deploy, e.g. `2 hours ago`.
    pub last_deploy: String,
    /// Month-to-date spend in dollars.
    pub cost: u32,
    /// Monthly budget in dollars.
    pub budget: u32,
    /// Projected month-end spend in dollars.
    pub forecast: u32,
    /// Savings identified in dollars.
    pub savings: u32,
    /// Scorecard.
    pub scores: QualityScores,
    /// Delivery metrics.
    pub dora: DoraMetrics,
}

impl Project {
    /// Spend as a whole percentage of budget, rounded down. Zero budget
    /// reports zero.
    pub fn budget_used_percent(&self) -> u32 {
        if self.budget == 0 {
            return 0;
        }
        let percent = u64::from(self.cost) * 100 / u64::from(self.budget);
        u32::try_from(percent).unwrap_or(u32::MAX)
    }
}

/// Addressable fields of a [`Project`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectField {
    /// `name`
    Name,
    /// `description`
    Description,
    /// `status`
    Status,
    /// `tier`
    Tier,
    /// `team`
    Team,
    /// `lastDeploy`
    LastDeploy,
    /// `cost`
    Cost,
    /// `budget`
    Budget,
    /// `scores` (nested, never matched)
    Scores,
    /// `dora` (nested, never matched)
    Dora,
}

impl ProjectField {
    /// Fields the projects search box looks at.
    pub const SEARCH_KEYS: [ProjectField; 3] =
        [ProjectField::Name, ProjectField::Team, ProjectField::Description];
}

impl Record for Project {
    type Key = ProjectField;

    fn id(&self) -> RecordId {
        RecordId::from(self.id)
    }

    fn field(&self, key: &ProjectField) -> Option<FieldValue<'_>> {
        Some(match key {
            ProjectField::Name => FieldValue::Text(&self.name),
            ProjectField::Description => FieldValue::Text(&self.description),
            ProjectField::Status => FieldValue::Text(self.status.as_str()),
            ProjectField::Tier => FieldValue::Text(self.tier.as_str()),
            ProjectField::Team => FieldValue::Text(&self.team),
            ProjectField::LastDeploy => FieldValue::Text(&self.last_deploy),
            ProjectField::Cost => FieldValue::Number(Number::from(self.cost)),
            ProjectField::Budget => FieldValue::Number(Number::from(self.budget)),
            ProjectField::Scores | ProjectField::Dora => FieldValue::Other,
        })
    }
}

/// The projects listing: search only.
pub fn listing<P>(projector: P) -> FilterableList<Project, P> {
    let list = SearchableList::<Project, P>::new(ProjectField::SEARCH_KEYS.to_vec(), projector)
        .with_placeholder("Search projects by name, team, or description...");
    FilterableList::new(list)
}

/// The projects listing scoped by status, with tags tallied from `items`.
pub fn listing_by_status<P>(items: &[Project], projector: P) -> FilterableList<Project, P> {
    let tabs = CategoryTabs::new(tally(items, &ProjectField::Status));
    listing(projector).with_category(ProjectField::Status, tabs)
}

// ============================================================================
// Tests
// ============================================================================
