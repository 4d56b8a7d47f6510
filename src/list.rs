use std::cmp::Reverse;

use chrono::NaiveDate;

use crate::catalog::{Catalog, ContentItem};
use crate::locale::{collation_key, Locale};
use crate::query::{HubQuery, SortKey};

fn matches(item: &ContentItem, query: &HubQuery, locale: Locale) -> bool {
    // Text scan first, it's the expensive predicate.
    if !query.search.is_empty() {
        let title = item.title(locale).to_lowercase();
        let description = item.description(locale).to_lowercase();
        if !title.contains(&query.search) && !description.contains(&query.search) {
            return false;
        }
    }
    if !query.category.is_empty() && item.category != query.category {
        return false;
    }
    if !query.tag.is_empty() && !item.tags.iter().any(|tag| tag == &query.tag) {
        return false;
    }
    true
}

/// Applies the AND of the query's non-empty predicates, keeping catalog
/// order. An unrecognized category or tag value just yields an empty list.
#[must_use]
pub fn filter<'a>(
    items: impl Iterator<Item = &'a ContentItem>,
    query: &HubQuery,
    locale: Locale,
) -> Vec<&'a ContentItem> {
    items.filter(|item| matches(item, query, locale)).collect()
}

/// Reorders in place under the chosen key. All four orderings use the
/// standard library's stable sort, so equal keys keep their filtered order.
pub fn sort(items: &mut [&ContentItem], sort_key: Option<SortKey>, locale: Locale) {
    let Some(sort_key) = sort_key else {
        return;
    };
    match sort_key {
        SortKey::Title => items.sort_by_key(|item| collation_key(item.title(locale))),
        SortKey::Category => items.sort_by(|f, g| f.category.cmp(&g.category)),
        SortKey::ReadTime => items.sort_by_key(|item| item.minutes.unwrap_or(0)),
        SortKey::Recent => {
            // Undated items take the minimum date, so they land last.
            items.sort_by_key(|item| Reverse(item.updated_at.unwrap_or(NaiveDate::MIN)));
        }
    }
}

/// The hero split: one item promoted to the featured slot, the rest in
/// their filtered+sorted order.
pub struct Listing<'a> {
    pub featured: Option<&'a ContentItem>,
    pub rest: Vec<&'a ContentItem>,
}

/// An explicitly flagged item wins the featured slot (first flagged one in
/// current list order); otherwise the first item does. The featured item is
/// removed from `rest` by slug.
#[must_use]
pub fn select_featured(items: Vec<&ContentItem>) -> Listing<'_> {
    let featured = items
        .iter()
        .find(|item| item.featured)
        .or_else(|| items.first())
        .copied();
    let rest = match featured {
        Some(featured) => items
            .into_iter()
            .filter(|item| item.slug != featured.slug)
            .collect(),
        None => items,
    };
    Listing { featured, rest }
}

/// The whole listing pipeline: filter, sort, featured split.
#[must_use]
pub fn query<'a>(catalog: &'a Catalog, query: &HubQuery, locale: Locale) -> Listing<'a> {
    let mut items = filter(catalog.items(), query, locale);
    sort(&mut items, query.sort, locale);
    select_featured(items)
}
