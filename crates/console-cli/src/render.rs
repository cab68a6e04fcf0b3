//! Plain-text rendering of listings.
//!
//! Each dataset has a projector turning one record into a [`Card`]; the
//! listing machinery decides which records get projected. Everything here
//! only formats.

use std::fmt::Write as _;

use console_catalog::{Extension, Project, Service, StatusKind, Template};
use console_core::{FieldValue, JsonRecord, Record};
use console_search::{CategoryTabs, ListView};
use serde_json::Value;

// ============================================================================
// Card
// ============================================================================

/// One rendered item: a title, optional badges, and detail lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// First line.
    pub title: String,
    /// Short tags printed after the title.
    pub badges: Vec<String>,
    /// Indented body lines.
    pub lines: Vec<String>,
}

impl Card {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            badges: Vec::new(),
            lines: Vec::new(),
        }
    }

    fn badge(mut self, badge: impl Into<String>) -> Self {
        self.badges.push(badge.into());
        self
    }

    fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Renders the card, clipping every line to `width` columns.
    pub fn render(&self, width: usize) -> String {
        let mut head = self.title.clone();
        for badge in &self.badges {
            let _ = write!(head, " [{badge}]");
        }
        let mut out = clip(&head, width);
        for line in &self.lines {
            out.push('\n');
            out.push_str(&clip(&format!("  {line}"), width));
        }
        out
    }
}

/// Shortens `text` to at most `width` characters, marking the cut with `...`.
pub fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let keep = width.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}

/// Badge text for a status.
pub fn status_badge(kind: StatusKind, label: Option<&str>) -> String {
    kind.label(label).to_string()
}

// ============================================================================
// Projectors
// ============================================================================

/// Template marketplace card.
pub fn template_card(t: &Template) -> Card {
    Card::new(&t.name)
        .badge(&t.category)
        .line(&t.description)
        .line(format!(
            "{} downloads | rating {} | {}",
            t.downloads, t.rating, t.estimated_cost
        ))
        .line(t.features.join(", "))
}

/// Extensions marketplace card.
pub fn extension_card(e: &Extension) -> Card {
    let card = Card::new(&e.name).badge(&e.category);
    let card = if e.installed {
        card.badge("Installed")
    } else {
        card
    };
    card.line(&e.description).line(format!(
        "{} downloads | rating {} | v{} by {}",
        e.downloads, e.rating, e.version, e.developer
    ))
}

/// Project card.
pub fn project_card(p: &Project) -> Card {
    Card::new(&p.name)
        .badge(status_badge(p.status.into(), None))
        .badge(p.tier.as_str())
        .line(&p.description)
        .line(format!("{} | deployed {}", p.team, p.last_deploy))
        .line(format!(
            "cost ${} of ${} ({}%) | forecast ${} | savings ${}",
            p.cost,
            p.budget,
            p.budget_used_percent(),
            p.forecast,
            p.savings
        ))
        .line(format!(
            "security {} | quality {} | performance {} | compliance {}",
            p.scores.security, p.scores.quality, p.scores.performance, p.scores.compliance
        ))
}

/// Service catalog card.
pub fn service_card(s: &Service) -> Card {
    let mut card = Card::new(&s.name);
    if let Some(maturity) = s.maturity {
        card = card.badge(maturity.label());
    }
    if let Some(version) = &s.version {
        card = card.badge(version);
    }
    card = card.badge(status_badge(s.effective_health().into(), None));
    if let Some(description) = &s.description {
        card = card.line(description);
    }
    card.line(format!(
        "owner {} | SLO {}%",
        s.owner_or_default(),
        s.slo_or_default()
    ))
}

/// Card for an untyped record: its `name` (or id) as title, then one line
/// per requested key that holds a primitive value.
pub fn json_card(record: &JsonRecord, keys: &[String]) -> Card {
    let title = match record.get("name") {
        Some(Value::String(name)) => name.clone(),
        _ => record.id().to_string(),
    };
    keys.iter()
        .filter(|key| key.as_str() != "name")
        .fold(Card::new(title), |card, key| match record.field(key) {
            Some(FieldValue::Text(text)) => card.line(format!("{key}: {text}")),
            Some(FieldValue::Number(n)) => card.line(format!("{key}: {n}")),
            Some(FieldValue::Other) | None => card,
        })
}

// ============================================================================
// Listing chrome
// ============================================================================

/// One line of category tags, the active one bracketed.
pub fn tabs_line(tabs: &CategoryTabs, show_counts: bool) -> String {
    tabs.tabs()
        .map(|tab| {
            let text = match tab.count {
                Some(count) if show_counts => format!("{} ({count})", tab.label),
                _ => tab.label.to_string(),
            };
            if tab.active {
                format!("[{text}]")
            } else {
                text
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// The search box: the query as typed, or the placeholder when blank.
pub fn search_line(placeholder: &str, query: &str) -> String {
    if query.trim().is_empty() {
        format!("Search: ({placeholder})")
    } else {
        format!("Search: {query}")
    }
}

/// The cards separated by blank lines, or the empty message.
pub fn view(view: &ListView<Card>, width: usize) -> String {
    match view {
        ListView::Empty { message } => message.clone(),
        ListView::Items(cards) => cards
            .iter()
            .map(|keyed| keyed.unit.render(width))
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}

// ============================================================================
// Tests
// ============================================================================
