// src/core/net.rs
//
// HTTPS GET through a blocking reqwest client.
// One client per scrape run; it is Send + Sync so workers share it.

use std::error::Error;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};

pub fn client() -> Result<Client, Box<dyn Error>> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?;
    Ok(client)
}

/// GET `url` and return the body. Non-2xx statuses are errors.
pub fn http_get(client: &Client, url: &str) -> Result<String, Box<dyn Error>> {
    let resp = client
        .get(url)
        .header(header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
        .send()?;

    let status = resp.status();
    if !status.is_success() {
        return Err(format!("HTTP error: {status} {url}").into());
    }
    Ok(resp.text()?)
}
