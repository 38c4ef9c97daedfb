//! Excerpt cleanup for meta descriptions.

use once_cell::sync::Lazy;
use regex::Regex;

static TAG_REGEX: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"<[^>]+>").ok());
static SHORTCODE_REGEX: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"\[[^\]]*\]").ok());

/// Remove HTML tags, then bracketed runs such as `[&hellip;]` or shortcodes.
///
/// Applying it twice gives the same result as applying it once.
pub fn strip_excerpt(html: &str) -> String {
    let without_tags = match TAG_REGEX.as_ref() {
        Some(re) => re.replace_all(html, ""),
        None => html.into(),
    };
    match SHORTCODE_REGEX.as_ref() {
        Some(re) => re.replace_all(&without_tags, "").trim().to_string(),
        None => without_tags.trim().to_string(),
    }
}
