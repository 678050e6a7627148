use anyhow::Result;
use reqwest::{Client, ClientBuilder, header};
use std::time::Duration;

const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.3 Safari/605.1.15";
const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9,tr-TR;q=0.8";

/// Builds a reqwest client with browser-like headers. Some sites serve
/// reduced markup to obvious bots, which would skew the structural counts.
pub fn build_http_client(timeout_secs: u64) -> Result<Client> {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::ACCEPT, "text/html,*/*;q=0.8".parse()?);
    headers.insert(header::ACCEPT_LANGUAGE, ACCEPT_LANGUAGE.parse()?);

    let client = ClientBuilder::new()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .timeout(Duration::from_secs(timeout_secs))
        .redirect(reqwest::redirect::Policy::limited(10))
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .build()?;

    Ok(client)
}
