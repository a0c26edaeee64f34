use thiserror::Error;

pub type Result<T> = std::result::Result<T, SiteFactsError>;

#[derive(Debug, Error)]
pub enum SiteFactsError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("missing domain in URL")]
    MissingDomain,
    #[error("invalid pattern `{name}`: {reason}")]
    Pattern { name: String, reason: String },
    #[error("fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },
    #[error("config error: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Other(String),
}

impl SiteFactsError {
    pub fn pattern(name: impl Into<String>, reason: impl ToString) -> Self {
        SiteFactsError::Pattern {
            name: name.into(),
            reason: reason.to_string(),
        }
    }

    pub fn fetch(url: impl Into<String>, reason: impl ToString) -> Self {
        SiteFactsError::Fetch {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}

/* Conversions so `?` works smoothly */
impl From<reqwest::Error> for SiteFactsError {
    fn from(e: reqwest::Error) -> Self {
        let url = e.url().map(|u| u.to_string()).unwrap_or_default();
        SiteFactsError::fetch(url, e)
    }
}
impl From<regex::Error> for SiteFactsError {
    fn from(e: regex::Error) -> Self {
        SiteFactsError::pattern("regex", e)
    }
}
