//! Dashboard datasets and listing presets.
//!
//! Each dashboard listing (templates, extensions, projects, the service
//! catalog) has a typed record here, a field enum naming its searchable
//! fields, the literal data the dashboard ships with, and a preset that
//! configures a [`console_search::FilterableList`] the way that page uses it.
//!
//! # Modules
//!
//! - [`template`], [`extension`], [`project`], [`service`]: typed records
//! - [`fixtures`]: the built-in literal datasets
//! - [`source`]: where items come from (literal arrays or JSON payloads)
//! - [`tally`]: category tags with counts derived from the data
//! - [`status`]: status badge kinds shared by projects and services
//! - [`collection`]: naming the datasets from the outside

pub mod collection;
pub mod extension;
pub mod fixtures;
pub mod project;
pub mod service;
pub mod source;
pub mod status;
pub mod tally;
pub mod template;

// Re-export commonly used types
pub use collection::Collection;
pub use extension::{Extension, ExtensionField};
pub use project::{DoraMetrics, Project, ProjectField, ProjectStatus, QualityScores, Tier};
pub use service::{Health, Maturity, Service, ServiceField};
pub use source::{FromPayload, ItemSource, JsonSource, StaticSource};
pub use status::StatusKind;
pub use tally::tally;
pub use template::{Template, TemplateField};
