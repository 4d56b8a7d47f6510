pub mod keeper;
use std::collections::HashSet;

pub use keeper::Keeper;

use camino::Utf8Path;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Site-wide metadata carried by the catalog file, used for link and
/// structured-data assembly.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Site {
    pub name: String,
    pub base_url: String,
    pub publisher: String,
    pub default_image: String,
}

/// One entry of the content catalog. `title` and `description` are the
/// default-locale (English) fields; the `_it` fields are Italian overrides
/// that take precedence when present.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ContentItem {
    pub title: String,
    pub description: String,
    pub slug: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub minutes: Option<u32>,
    #[serde(default)]
    pub updated_at: Option<NaiveDate>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub title_it: Option<String>,
    #[serde(default)]
    pub description_it: Option<String>,
}

impl ContentItem {
    #[must_use]
    pub fn title(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.title,
            Locale::It => self
                .title_it
                .as_deref()
                .filter(|t| !t.is_empty())
                .unwrap_or(&self.title),
        }
    }

    #[must_use]
    pub fn description(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.description,
            Locale::It => self
                .description_it
                .as_deref()
                .filter(|d| !d.is_empty())
                .unwrap_or(&self.description),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Duplicate slug in catalog: {0}")]
    DuplicateSlug(String),
    #[error("Item ({0}) has an empty category")]
    EmptyCategory(String),
}

/// The in-memory catalog: read-only after loading. Queries never mutate it.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    pub site: Site,
    #[serde(default)]
    pub items: Vec<ContentItem>,
}

impl Catalog {
    pub fn from_yaml(yaml: &str) -> Result<Self, LoadError> {
        let catalog: Catalog = serde_yaml::from_str(yaml)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn read_from_path(path: &Utf8Path) -> Result<Self, LoadError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml(&yaml)
    }

    fn validate(&self) -> Result<(), LoadError> {
        let mut seen = HashSet::new();
        for item in &self.items {
            if item.category.trim().is_empty() {
                return Err(LoadError::EmptyCategory(item.slug.clone()));
            }
            if !seen.insert(item.slug.as_str()) {
                return Err(LoadError::DuplicateSlug(item.slug.clone()));
            }
        }
        Ok(())
    }

    pub fn items(&self) -> std::slice::Iter<'_, ContentItem> {
        self.items.iter()
    }
}
