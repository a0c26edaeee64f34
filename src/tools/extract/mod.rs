//! Candidate extractors, one per fact type.
//!
//! An extractor only finds text. It never validates, and it returns an
//! empty list rather than an error when a page has nothing to offer.
//! Candidates come back in priority order: the first one that survives
//! normalization and validation wins for singular facts.

mod address;
mod company;
mod contact;
mod hours;
mod services;
mod social;
mod testimonials;
mod utils;

pub use address::AddressExtractor;
pub use company::CompanyExtractor;
pub use contact::{EmailExtractor, PhoneExtractor};
pub use hours::HoursExtractor;
pub use services::{finalize_services, ServiceExtractor};
pub use social::SocialExtractor;
pub use testimonials::{finalize_testimonials, TestimonialExtractor};

use crate::document::Document;
use crate::error::{Result, SiteFactsError};
use crate::tools::patterns::{FactKind, PatternLibrary};
use crate::tools::types::Candidate;
use crate::types::Domain;
use url::Url;

/// What an extractor sees of one page.
pub struct PageContext<'a> {
    pub doc: &'a Document,
    pub url: &'a str,
    pub patterns: &'a PatternLibrary,
}

impl<'a> PageContext<'a> {
    pub fn new(doc: &'a Document, url: &'a str, patterns: &'a PatternLibrary) -> Self {
        Self { doc, url, patterns }
    }

    /// Canonical domain of the page URL.
    pub fn domain(&self) -> Result<Domain> {
        let url = Url::parse(self.url)
            .map_err(|e| SiteFactsError::InvalidUrl(format!("{}: {e}", self.url)))?;
        Domain::from_url(&url).ok_or(SiteFactsError::MissingDomain)
    }

    /// Lower-cased host as written in the URL, `www.` included.
    pub fn host(&self) -> String {
        Url::parse(self.url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_lowercase))
            .unwrap_or_default()
    }
}

pub trait Extractor: Send + Sync {
    fn kind(&self) -> FactKind;

    /// Raw candidates in priority order.
    fn candidates<'a>(&self, ctx: &PageContext<'a>) -> Result<Vec<Candidate<'a>>>;
}

/// The extractor responsible for a fact type.
pub fn extractor(kind: FactKind) -> &'static dyn Extractor {
    match kind {
        FactKind::CompanyName => &CompanyExtractor,
        FactKind::Email => &EmailExtractor,
        FactKind::Phone => &PhoneExtractor,
        FactKind::Address => &AddressExtractor,
        FactKind::Hours => &HoursExtractor,
        FactKind::Service => &ServiceExtractor,
        FactKind::Testimonial => &TestimonialExtractor,
        FactKind::SocialLink => &SocialExtractor,
    }
}
