use super::types::FetchOptions;
use crate::error::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::{redirect, Client};
use std::time::Duration;

const POOL_IDLE_TIMEOUT_SEC: u64 = 90;

/// Build the async client used for every page of a discovery run.
pub(crate) fn build_client(opts: &FetchOptions) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml;q=0.9,*/*;q=0.8"),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

    let client = Client::builder()
        .user_agent(opts.user_agent.as_str())
        .default_headers(headers)
        .cookie_store(true)
        .redirect(redirect::Policy::limited(opts.redirect_limit))
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .timeout(Duration::from_millis(opts.timeout_ms))
        .pool_idle_timeout(Duration::from_secs(POOL_IDLE_TIMEOUT_SEC))
        .build()?;
    Ok(client)
}
