//! SEO and Open Graph props derived from a content item.

use crate::config::SiteMetaConfig;
use crate::content::ContentItem;
use crate::render::excerpt::strip_excerpt;

/// Everything the document head needs, already in plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeoMeta {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub image_alt: String,
    pub og_type: &'static str,
    pub locale: String,
    pub site_name: String,
    pub url: Option<String>,
    pub published_time: Option<String>,
    pub modified_time: Option<String>,
    pub author: Option<String>,
}

impl SeoMeta {
    /// Build props for `item`. `canonical_url` is set when the host is known.
    pub fn from_item(item: &ContentItem, site: &SiteMetaConfig, canonical_url: Option<String>) -> Self {
        let image_alt = item
            .featured_image
            .as_ref()
            .and_then(|img| img.alt_text.as_deref())
            .filter(|alt| !alt.trim().is_empty())
            .unwrap_or(item.title.as_str())
            .to_string();

        Self {
            title: item.title.clone(),
            description: strip_excerpt(&item.excerpt_html),
            image: item.featured_image.as_ref().map(|img| img.url.clone()),
            image_alt,
            og_type: "article",
            locale: site.locale.clone(),
            site_name: site.name.clone(),
            url: canonical_url,
            published_time: item.published_at.clone(),
            modified_time: item.modified_at.clone(),
            author: item.author_name.clone(),
        }
    }

    /// `(attribute, key, content)` triples in document order.
    pub fn tags(&self) -> Vec<(&'static str, &'static str, &str)> {
        let mut tags = vec![
            ("name", "description", self.description.as_str()),
            ("property", "og:title", self.title.as_str()),
            ("property", "og:description", self.description.as_str()),
            ("property", "og:type", self.og_type),
            ("property", "og:locale", self.locale.as_str()),
            ("property", "og:site_name", self.site_name.as_str()),
        ];
        if let Some(url) = &self.url {
            tags.push(("property", "og:url", url.as_str()));
        }
        if let Some(image) = &self.image {
            tags.push(("property", "og:image", image.as_str()));
            tags.push(("property", "og:image:alt", self.image_alt.as_str()));
        }
        if let Some(published) = &self.published_time {
            tags.push(("property", "article:published_time", published.as_str()));
        }
        if let Some(modified) = &self.modified_time {
            tags.push(("property", "article:modified_time", modified.as_str()));
        }
        if let Some(author) = &self.author {
            tags.push(("property", "article:author", author.as_str()));
        }
        tags
    }
}
