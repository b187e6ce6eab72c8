// src/scrape/mod.rs
//
// One-shot headline scraper: GET a page, select one CSS class, print the
// first N texts numbered from 1.

use std::io::{self, Write};

use scraper::Selector;
use thiserror::Error;

use crate::config::options::ScrapeOptions;
use crate::core::{html, net};

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Transport failure, non-2xx status or an undecodable body.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    #[error("invalid selector '{css}': {message}")]
    Selector { css: String, message: String },
}

impl ScrapeError {
    /// Headline the user sees in front of the cause.
    pub fn report(&self) -> String {
        match self {
            ScrapeError::Request(e) => format!("Error while requesting the web page: {e}"),
            other => format!("Error while scraping: {other}"),
        }
    }
}

fn parse_selector(opts: &ScrapeOptions) -> Result<Selector, ScrapeError> {
    html::selector(&opts.selector).map_err(|message| ScrapeError::Selector {
        css: opts.selector.clone(),
        message,
    })
}

/// Pull the headline texts out of an already fetched page.
pub fn extract_headlines(doc: &str, opts: &ScrapeOptions) -> Result<Vec<String>, ScrapeError> {
    let sel = parse_selector(opts)?;
    Ok(html::select_text(doc, &sel, opts.limit))
}

pub fn fetch_headlines(opts: &ScrapeOptions) -> Result<Vec<String>, ScrapeError> {
    // Selector is checked before the request goes out.
    let sel = parse_selector(opts)?;

    let client = net::client()?;
    logf!("Scrape: GET {}", opts.url);
    let body = net::http_get(&client, &opts.url)?;
    logd!("Scrape: {} bytes", body.len());

    let lines = html::select_text(&body, &sel, opts.limit);
    logf!("Scrape: {} headline(s) via {:?}", lines.len(), opts.selector);
    Ok(lines)
}

pub fn print_headlines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    writeln!(out, "\n=== Naver News headlines ===")?;
    for (i, line) in lines.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, line)?;
    }
    Ok(())
}

/// Fetch and print. Failures are reported on `out`, not returned; only a
/// broken `out` is an error.
pub fn run<W: Write>(opts: &ScrapeOptions, out: &mut W) -> io::Result<()> {
    match fetch_headlines(opts) {
        Ok(lines) => print_headlines(out, &lines),
        Err(e) => {
            loge!("Scrape: {}", e);
            writeln!(out, "{}", e.report())
        }
    }
}
