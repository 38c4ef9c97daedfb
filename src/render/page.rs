//! HTML documents for served and missing pages.

use std::fmt::Write;

use crate::content::ContentItem;
use crate::render::meta::SeoMeta;

/// Escape text for use inside element content or a quoted attribute.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Full article document. The body markup comes from the CMS as-is.
pub fn render_article(item: &ContentItem, meta: &SeoMeta) -> String {
    let mut head = String::new();
    for (attr, key, content) in meta.tags() {
        let _ = writeln!(head, r#"<meta {}="{}" content="{}">"#, attr, key, escape(content));
    }

    let image = match &item.featured_image {
        Some(img) => format!(
            r#"<img src="{}" alt="{}">"#,
            escape(&img.url),
            escape(&meta.image_alt)
        ),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
{head}</head>
<body>
<div class="post-container">
<h1>{title}</h1>
{image}
<article>{body}</article>
</div>
</body>
</html>
"#,
        lang = escape(&html_lang(&meta.locale)),
        title = escape(&item.title),
        head = head,
        image = image,
        body = item.body_html,
    )
}

/// Generic not-found document. Never carries error details.
pub fn render_not_found() -> String {
    r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Page not found</title>
</head>
<body>
<h1>404</h1>
<p>This page could not be found.</p>
</body>
</html>
"#
    .to_string()
}

fn html_lang(locale: &str) -> String {
    locale.replace('_', "-")
}
