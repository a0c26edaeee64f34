use crate::config::{Config, DiscoverOptions};
use crate::document::Document;
use crate::error::*;
use crate::log::ActivityLogger;
use crate::tools::aggregate::aggregate;
use crate::tools::batch::batch;
use crate::tools::fetch::{normalize_site_url, target_pages, Fetcher, ReqwestFetcher};
use crate::tools::page::extract_page;
use crate::tools::patterns::PatternLibrary;
use crate::types::*;
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

// Activity logging never breaks the operation being logged.
fn log_info(domain: Option<&str>, event: &str, details: Option<&str>) {
    if let Ok(logger) = ActivityLogger::new() {
        let _ = logger.info(domain, event, details);
    }
}

fn log_error(domain: Option<&str>, event: &str, details: Option<&str>) {
    if let Ok(logger) = ActivityLogger::new() {
        let _ = logger.error(domain, event, details);
    }
}

/* ------------ public facade components ------------ */

pub struct Components {
    pub fetcher: Arc<dyn Fetcher>,
    pub patterns: Arc<PatternLibrary>,
    pub opts: DiscoverOptions,
    /// Append each discovery run to the activity log.
    pub log_activity: bool,
}

impl Components {
    /// Real HTTP fetcher plus the configured pattern tables.
    pub fn from_config(config: &Config) -> Result<Self> {
        let fetcher = ReqwestFetcher::new(&config.discover.fetch)?;
        Self::with_fetcher(Arc::new(fetcher), config)
    }

    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>, config: &Config) -> Result<Self> {
        Ok(Self {
            fetcher,
            patterns: Arc::new(PatternLibrary::new(&config.patterns)?),
            opts: config.discover.clone(),
            log_activity: true,
        })
    }
}

/* ------------ extraction entrypoints ------------ */

/// Parse one HTML page and extract its facts.
pub fn extract_html(url: &str, html: &str, lib: &PatternLibrary) -> FactRecord {
    let doc = Document::parse(html);
    extract_page(&doc, url, lib)
}

/// Extract every page and merge the first `page_cap` records, in the order
/// given.
pub fn extract_site(pages: &[(String, Document)], lib: &PatternLibrary, page_cap: usize) -> FactRecord {
    let records: Vec<FactRecord> = pages
        .iter()
        .take(page_cap)
        .map(|(url, doc)| extract_page(doc, url, lib))
        .collect();
    aggregate(&records, page_cap)
}

/// Fetch the site's target pages, extract each, and aggregate.
///
/// Only an unusable site URL is an error. Pages that cannot be fetched are
/// reported in [`Discovery::pages`] and contribute an empty record.
pub async fn discover(input: &str, components: &Components) -> Result<Discovery> {
    let start_time = Instant::now();
    let site = match normalize_site_url(input) {
        Ok(site) => site,
        Err(e) => {
            if components.log_activity {
                log_error(None, "discover", Some(&e.to_string()));
            }
            return Err(e);
        }
    };
    let domain = Domain::from_url(&site).ok_or(SiteFactsError::MissingDomain)?;
    let opts = &components.opts;
    let targets = target_pages(&site, &opts.about_path, opts.page_cap);

    let fetcher = Arc::clone(&components.fetcher);
    let patterns = Arc::clone(&components.patterns);
    let outcomes = batch(targets, opts.concurrency, move |url| {
        let fetcher = Arc::clone(&fetcher);
        let patterns = Arc::clone(&patterns);
        async move { analyze_page(fetcher, patterns, url).await }
    })
    .await;

    let (pages, records): (Vec<PageReport>, Vec<FactRecord>) = outcomes.into_iter().unzip();
    let record = aggregate(&records, opts.page_cap);
    let duration_ms = start_time.elapsed().as_millis() as u64;
    let discovery = Discovery {
        site_url: site.to_string(),
        pages,
        record,
        duration_ms,
        finished_at: Utc::now(),
    };

    let analyzed = discovery.pages_analyzed();
    info!(
        domain = %domain,
        pages = analyzed,
        duration_ms,
        "discovery finished"
    );
    if components.log_activity {
        let details = format!(
            "{analyzed}/{} pages in {duration_ms}ms",
            discovery.pages.len()
        );
        if analyzed == 0 {
            log_error(Some(&domain.0), "discover", Some(&details));
        } else {
            log_info(Some(&domain.0), "discover", Some(&details));
        }
    }
    Ok(discovery)
}

/// Blocking wrapper over [`discover`] on the shared runtime. Must not be
/// called from inside an async context.
pub fn discover_blocking(input: &str, components: &Components) -> Result<Discovery> {
    crate::runtime::block_on(discover(input, components))
}

async fn analyze_page(
    fetcher: Arc<dyn Fetcher>,
    patterns: Arc<PatternLibrary>,
    url: String,
) -> (PageReport, FactRecord) {
    debug!(url = %url, fetcher = fetcher.name(), "fetching page");
    let html = match fetcher.fetch(&url).await {
        Ok(html) => html,
        Err(e) => {
            warn!(url = %url, error = %e, "page skipped");
            return (PageReport::skipped(url, e.to_string()), FactRecord::default());
        }
    };

    let page_url = url.clone();
    let parsed =
        tokio::task::spawn_blocking(move || extract_html(&page_url, &html, &patterns)).await;
    match parsed {
        Ok(record) => (PageReport::analyzed(url), record),
        Err(e) => {
            warn!(url = %url, error = %e, "page extraction aborted");
            (PageReport::skipped(url, e.to_string()), FactRecord::default())
        }
    }
}
