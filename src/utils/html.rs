// src/utils/html.rs

use url::{ParseError, Url};

/// Clean HTML content using the ammonia library.
///
/// Question and choice text come straight from scraped pages, so they may
/// carry markup. Safe tags (like <b>, <code>) are kept, while <script>,
/// <iframe> and event-handler attributes are stripped before the text is
/// handed to the browser.
pub fn clean_html(input: &str) -> String {
    ammonia::clean(input)
}

/// Returns the image reference if the browser can safely load it.
///
/// Absolute references must use http or https. Relative references
/// (e.g. `images/q12.png`) are resolved by the page, so they pass as-is.
pub fn safe_image_src(src: &str) -> Option<String> {
    let src = src.trim();
    if src.is_empty() {
        return None;
    }

    match Url::parse(src) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Some(src.to_string()),
        Ok(_) => None,
        Err(ParseError::RelativeUrlWithoutBase) => Some(src.to_string()),
        Err(_) => None,
    }
}
