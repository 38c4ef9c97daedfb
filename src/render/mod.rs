//! Page rendering.
//!
//! Turns a served [`ContentItem`](crate::content::ContentItem) into an HTML
//! document with SEO metadata, or produces the not-found page.

pub mod excerpt;
pub mod meta;
pub mod page;

pub use excerpt::strip_excerpt;
pub use meta::SeoMeta;
pub use page::{render_article, render_not_found};
