use serde::Serialize;

use crate::catalog::{ContentItem, Site};
use crate::list::Listing;
use crate::locale::{category_label, Locale};

/// Upper bound on `blogPost` entries in the structured-data output.
const STRUCTURED_DATA_LIMIT: usize = 20;

/// A catalog item resolved for one locale, ready for card rendering.
/// Optional fields are dropped from the JSON rather than shown as zeroes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRecord {
    pub title: String,
    pub description: String,
    pub href: String,
    pub category: String,
    pub category_label: String,
    pub tags: Vec<String>,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    pub featured: bool,
}

#[must_use]
pub fn display(item: &ContentItem, site: &Site, locale: Locale) -> DisplayRecord {
    DisplayRecord {
        title: item.title(locale).to_owned(),
        description: item.description(locale).to_owned(),
        href: format!("/{locale}/{}", item.slug),
        category: item.category.clone(),
        category_label: category_label(&item.category, locale).to_owned(),
        tags: item.tags.clone(),
        image: item
            .image
            .clone()
            .unwrap_or_else(|| site.default_image.clone()),
        minutes: item.minutes,
        updated_at: item.updated_at.map(|date| date.to_string()),
        featured: item.featured,
    }
}

/// The listing page payload: hero card plus the remaining cards.
#[derive(Debug, Serialize)]
pub struct HubPage {
    pub featured: Option<DisplayRecord>,
    pub items: Vec<DisplayRecord>,
}

#[must_use]
pub fn page(listing: &Listing<'_>, site: &Site, locale: Locale) -> HubPage {
    HubPage {
        featured: listing.featured.map(|item| display(item, site, locale)),
        items: listing
            .rest
            .iter()
            .map(|item| display(item, site, locale))
            .collect(),
    }
}

#[derive(Debug, Serialize)]
pub struct Organization {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: String,
}

impl Organization {
    fn named(name: &str) -> Self {
        Organization {
            schema_type: "Organization",
            name: name.to_owned(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BlogPosting {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub headline: String,
    pub description: String,
    pub url: String,
    pub image: String,
    #[serde(rename = "dateModified", skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
    pub author: Organization,
    pub publisher: Organization,
}

/// The `Blog` JSON-LD object, embedded verbatim by the caller as a
/// `<script type="application/ld+json">` payload.
#[derive(Debug, Serialize)]
pub struct BlogJsonLd {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: String,
    pub url: String,
    #[serde(rename = "blogPost")]
    pub blog_post: Vec<BlogPosting>,
}

/// Builds the structured-data object from the filtered+sorted list, capped
/// at the first [`STRUCTURED_DATA_LIMIT`] entries.
#[must_use]
pub fn blog_json_ld(items: &[&ContentItem], site: &Site, locale: Locale) -> BlogJsonLd {
    let blog_post = items
        .iter()
        .take(STRUCTURED_DATA_LIMIT)
        .map(|item| BlogPosting {
            schema_type: "BlogPosting",
            headline: item.title(locale).to_owned(),
            description: item.description(locale).to_owned(),
            url: format!("{}/{locale}/{}", site.base_url, item.slug),
            image: format!(
                "{}{}",
                site.base_url,
                item.image.as_deref().unwrap_or(&site.default_image)
            ),
            date_modified: item.updated_at.map(|date| date.to_string()),
            author: Organization::named(&site.publisher),
            publisher: Organization::named(&site.publisher),
        })
        .collect();
    BlogJsonLd {
        context: "https://schema.org",
        schema_type: "Blog",
        name: site.name.clone(),
        url: format!("{}/{locale}/community", site.base_url),
        blog_post,
    }
}
