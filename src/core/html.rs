// src/core/html.rs
use scraper::{Html, Selector};

use super::sanitize::normalize_ws;

/// Parse a CSS selector, keeping the parser's message on failure.
pub fn selector(css: &str) -> Result<Selector, String> {
    Selector::parse(css).map_err(|e| e.to_string())
}

/// Visible text of every element matching `sel`, in document order,
/// whitespace-collapsed. At most `limit` entries.
pub fn select_text(doc: &str, sel: &Selector, limit: usize) -> Vec<String> {
    let html = Html::parse_document(doc);
    html.select(sel)
        .take(limit)
        .map(|el| normalize_ws(&el.text().collect::<String>()))
        .collect()
}
