//! Listing commands.
//!
//! Every command builds the dataset's listing preset, applies the requested
//! category and query, and returns the rendered page as text. Printing is
//! left to the caller.

use std::path::Path;

use console_catalog::source::{FromPayload, ItemSource, JsonSource, StaticSource};
use console_catalog::{
    Collection, Template, TemplateField, extension, fixtures, project, service, tally, template,
};
use console_core::{JsonRecord, Record, Result};
use console_search::{CategoryTabs, FilterableList, SearchableList};

use crate::cli::{FilterArgs, JsonArgs, ListArgs};
use crate::config::ConsoleConfig;
use crate::render::{self, Card};

// ============================================================================
// Built-in datasets
// ============================================================================

/// `platform-console templates`
///
/// The built-in marketplace uses its fixed tag counts; a payload given with
/// `--from` gets tags tallied from its own items.
pub fn templates(args: &ListArgs, config: &ConsoleConfig) -> Result<String> {
    let (items, filters) = match &args.from {
        Some(path) => {
            let items: Vec<Template> = from_payload(path, Collection::Templates)?;
            let filters = tally(&items, &TemplateField::Category);
            (items, filters)
        }
        None => (fixtures::templates(), fixtures::template_filters()),
    };
    let page = template::listing_with_filters(filters, render::template_card);
    Ok(show(page, &items, &args.filter, config))
}

/// `platform-console extensions`
pub fn extensions(args: &ListArgs, config: &ConsoleConfig) -> Result<String> {
    let items = load(args, Collection::Extensions, fixtures::extensions)?;
    let page = extension::listing(render::extension_card);
    Ok(show(page, &items, &args.filter, config))
}

/// `platform-console projects`
pub fn projects(args: &ListArgs, config: &ConsoleConfig) -> Result<String> {
    let items = load(args, Collection::Projects, fixtures::projects)?;
    let page = project::listing_by_status(&items, render::project_card);
    Ok(show(page, &items, &args.filter, config))
}

/// `platform-console services`
pub fn services(args: &ListArgs, config: &ConsoleConfig) -> Result<String> {
    let items = load(args, Collection::Services, fixtures::services)?;
    let page = service::listing_by_maturity(&items, render::service_card);
    Ok(show(page, &items, &args.filter, config))
}

// ============================================================================
// Ad-hoc JSON
// ============================================================================

/// `platform-console json`: list any array of objects.
///
/// Search covers `--keys`; `--category-key` adds tags tallied from the
/// payload. The configured placeholder and empty message apply.
pub fn json(args: &JsonArgs, config: &ConsoleConfig) -> Result<String> {
    let mut source = JsonSource::<JsonRecord>::from_path(&args.file)?;
    if let Some(name) = &args.collection {
        source = source.with_collection(name.clone());
    }
    let items = source.load()?;

    let card_keys = args.keys.clone();
    let list = SearchableList::<JsonRecord, _>::new(args.keys.clone(), move |r: &JsonRecord| {
        render::json_card(r, &card_keys)
    })
    .with_config(config.list.clone());

    let mut page = FilterableList::new(list);
    if let Some(key) = &args.category_key {
        page = page.with_category(key.clone(), CategoryTabs::new(tally(&items, key)));
    }
    Ok(show(page, &items, &args.filter, config))
}

// ============================================================================
// Helpers
// ============================================================================

fn load<T>(args: &ListArgs, collection: Collection, builtin: fn() -> Vec<T>) -> Result<Vec<T>>
where
    T: FromPayload + Clone,
{
    match &args.from {
        Some(path) => from_payload(path, collection),
        None => StaticSource::new(builtin()).load(),
    }
}

fn from_payload<T: FromPayload>(path: &Path, collection: Collection) -> Result<Vec<T>> {
    JsonSource::<T>::from_path(path)?
        .with_collection(collection.envelope())
        .load()
}

/// Applies the selection and renders tags, search box, tally line, and
/// cards.
fn show<T, P>(
    page: FilterableList<T, P>,
    items: &[T],
    filter: &FilterArgs,
    config: &ConsoleConfig,
) -> String
where
    T: Record,
    P: Fn(&T) -> Card,
{
    let mut page = page.with_empty_message(config.list.empty_message.clone());
    if let Some(category) = &filter.category {
        page.select_category(category.clone());
    }
    if let Some(query) = &filter.query {
        page.set_query(query.clone());
    }

    let mut out = Vec::new();
    if let Some(tabs) = page.tabs() {
        out.push(render::tabs_line(tabs, config.display.show_counts));
    }
    out.push(render::search_line(page.list().placeholder(), page.list().query()));

    let view = page.render(items);
    out.push(format!("Showing {} of {}", view.len(), items.len()));
    out.push(String::new());
    out.push(render::view(&view, config.display.width));
    out.join("\n")
}

// ============================================================================
// Tests
// ============================================================================
