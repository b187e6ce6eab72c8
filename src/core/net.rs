// src/core/net.rs
//
// Blocking HTTP GET. One request, no retry.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};

pub fn client() -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()
}

/// GET `url` and return the body text. Non-2xx statuses are errors.
pub fn http_get(client: &Client, url: &str) -> reqwest::Result<String> {
    let resp = client.get(url).send()?.error_for_status()?;
    logd!("Net: {} -> {}", url, resp.status());
    resp.text()
}
