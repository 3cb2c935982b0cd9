//! Page fetching: the one networked collaborator of the engine.
//!
//! The engine itself is pure; this module supplies it with
//! `(html_text, final_url)` pairs. Redirects are followed by the client,
//! HTTP error statuses surface as [`ContactError::Http`], and the final
//! post-redirect URL is what the extractor uses as its resolution base.
//! Retry policy, if any, belongs to the caller.

use crate::error::Result;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// User agent sent with every request
pub const USER_AGENT: &str = "contactrs/0.1 (+https://github.com/contactrs/contactrs)";

/// Per-request timeout in seconds
const TIMEOUT_SECS: u64 = 15;

/// Build the HTTP client used for crawling.
pub fn default_client() -> Client {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(TIMEOUT_SECS))
        .build()
        .expect("failed to build HTTP client")
}

/// Fetch a URL, returning the body text and the final resolved URL.
pub async fn fetch_html(client: &Client, url: &str) -> Result<(String, String)> {
    debug!("fetching {url}");
    let response = client.get(url).send().await?.error_for_status()?;
    let final_url = response.url().to_string();
    let body = response.text().await?;
    debug!("fetched {} bytes from {final_url}", body.len());
    Ok((body, final_url))
}
