use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain(pub String);

impl Domain {
    /// Canonicalize host to a stable key: lowercase + IDNA/Punycode, no `www.`
    fn canonicalize(host: &str) -> String {
        let lower = host.trim().trim_end_matches('.').to_ascii_lowercase();
        let ascii = idna::domain_to_ascii(&lower).unwrap_or(lower);
        match ascii.strip_prefix("www.") {
            Some(rest) => rest.to_string(),
            None => ascii,
        }
    }

    pub fn from_url(url: &Url) -> Option<Self> {
        url.domain().map(|d| Domain(Self::canonicalize(d)))
    }

    /// Build a Domain from raw user text (CLI, API callers, etc.)
    pub fn from_raw(host: &str) -> Self {
        Domain(Self::canonicalize(host))
    }

    /// First DNS label, e.g. `acmeheating` for `acmeheating.com`.
    pub fn first_label(&self) -> &str {
        self.0.split('.').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Social platforms recognized on a page, in lookup order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Platform {
    Facebook,
    LinkedIn,
    Instagram,
    Twitter,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Facebook,
        Platform::LinkedIn,
        Platform::Instagram,
        Platform::Twitter,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Platform::Facebook => "Facebook",
            Platform::LinkedIn => "LinkedIn",
            Platform::Instagram => "Instagram",
            Platform::Twitter => "Twitter",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a record's service list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ServiceOrigin {
    /// Found in the page markup.
    #[default]
    Extracted,
    /// Canned list picked from domain keywords because nothing was found.
    Fallback,
}

/// Structured facts for one page or one aggregated site.
///
/// Every string has been normalized and validated before it lands here.
/// Address and hours are singular by policy.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactRecord {
    pub company_name: Option<String>,
    #[serde(default)]
    pub emails: BTreeSet<String>,
    #[serde(default)]
    pub phones: BTreeSet<String>,
    pub address: Option<String>,
    pub hours: Option<String>,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub service_origin: ServiceOrigin,
    #[serde(default)]
    pub testimonials: Vec<String>,
    #[serde(default)]
    pub social_media: BTreeMap<Platform, String>,
}

/// Outcome of fetching and extracting one target page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageReport {
    pub url: String,
    pub analyzed: bool,
    pub error: Option<String>,
}

impl PageReport {
    pub fn analyzed(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            analyzed: true,
            error: None,
        }
    }

    pub fn skipped(url: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            analyzed: false,
            error: Some(error.into()),
        }
    }
}

/// Result of a site discovery run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discovery {
    pub site_url: String,
    pub pages: Vec<PageReport>,
    pub record: FactRecord,
    pub duration_ms: u64,
    pub finished_at: DateTime<Utc>,
}

impl Discovery {
    pub fn pages_analyzed(&self) -> usize {
        self.pages.iter().filter(|p| p.analyzed).count()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}
impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }
    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}
