// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::Result;
use crate::models::CrawlerConfig;

/// Create a configured blocking HTTP client.
pub fn create_client(config: &CrawlerConfig) -> Result<Client> {
    let client = Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// POST url-encoded form fields and return the response body.
pub fn post_form(client: &Client, url: &str, fields: &[(&str, &str)]) -> Result<String> {
    let response = client.post(url).form(fields).send()?.error_for_status()?;
    Ok(response.text()?)
}

/// GET a page and return the response body.
pub fn get_text(client: &Client, url: &str) -> Result<String> {
    let response = client.get(url).send()?.error_for_status()?;
    Ok(response.text()?)
}
