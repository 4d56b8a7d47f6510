use serde::Serialize;

use crate::catalog::Catalog;

/// Distinct values for the listing page's filter controls.
#[derive(Debug, PartialEq, Serialize)]
pub struct Facets {
    pub categories: Vec<String>,
    pub tags: Vec<String>,
}

fn collate(mut values: Vec<String>) -> Vec<String> {
    values.sort();
    values.dedup();
    values
}

/// Derives the facet lists from the whole (unfiltered) catalog.
#[must_use]
pub fn facets(catalog: &Catalog) -> Facets {
    Facets {
        categories: collate(catalog.items().map(|item| item.category.clone()).collect()),
        tags: collate(
            catalog
                .items()
                .flat_map(|item| item.tags.iter().cloned())
                .collect(),
        ),
    }
}
