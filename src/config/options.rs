// src/config/options.rs
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub url: String,
    pub selector: String,
    /// How many matches to print at most.
    pub limit: usize,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            url: s!(NEWS_URL),
            selector: s!(HEADLINE_SELECTOR),
            limit: HEADLINE_LIMIT,
        }
    }
}

impl ScrapeOptions {
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = selector.into();
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}
