//! Page fetching for site discovery.
//!
//! The extraction core never touches the network. Everything HTTP lives
//! behind the [`Fetcher`] trait so tests and embedders can swap it out.

mod client;
mod utils;

pub mod types;

pub use types::*;

use crate::error::{Result, SiteFactsError};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

#[async_trait]
pub trait Fetcher: Send + Sync {
    fn name(&self) -> &'static str;

    /// Body of an HTML page, or an error if the page is unusable.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// [`Fetcher`] backed by one pooled async `reqwest` client.
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn new(opts: &FetchOptions) -> Result<Self> {
        Ok(Self {
            client: client::build_client(opts)?,
        })
    }
}

#[async_trait]
impl Fetcher for ReqwestFetcher {
    fn name(&self) -> &'static str {
        "reqwest"
    }

    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        utils::validate_response(status, &body).map_err(|reason| SiteFactsError::fetch(url, reason))?;
        debug!(url, status = status.as_u16(), bytes = body.len(), "fetched");
        Ok(body)
    }
}

/// Parse user input as a site URL, assuming `https://` when no scheme is
/// given.
///
/// # Examples
/// ```
/// use sitefacts::tools::fetch::normalize_site_url;
///
/// let url = normalize_site_url("acmeheating.com").unwrap();
/// assert_eq!(url.as_str(), "https://acmeheating.com/");
/// ```
pub fn normalize_site_url(input: &str) -> Result<Url> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(SiteFactsError::InvalidUrl("empty url".into()));
    }
    let lower = trimmed.to_ascii_lowercase();
    let candidate = if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };
    let url = Url::parse(&candidate)
        .map_err(|e| SiteFactsError::InvalidUrl(format!("{trimmed}: {e}")))?;
    if url.domain().is_none() {
        return Err(SiteFactsError::MissingDomain);
    }
    Ok(url)
}

/// Pages to analyze, in aggregation order: the site itself, then its about
/// page, truncated to `page_cap`.
pub fn target_pages(site: &Url, about_path: &str, page_cap: usize) -> Vec<String> {
    let base = site.as_str().trim_end_matches('/');
    let about = format!("{base}/{}", about_path.trim_start_matches('/'));
    let mut pages = vec![site.to_string(), about];
    pages.truncate(page_cap);
    pages
}
