//! Pattern Library
//!
//! Named rules for every fact type: where to look (page text, CSS scope or
//! attribute match), which regexes recognize the fact, what rejects it and
//! how long it may be. Built once from a [`PatternConfig`] and read-only
//! after that.

mod rules;
mod tests;

use crate::document::Document;
use crate::error::{Result, SiteFactsError};
use crate::types::{Domain, Platform};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Selector};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fact types a page can yield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FactKind {
    CompanyName,
    Email,
    Phone,
    Address,
    Hours,
    Service,
    Testimonial,
    SocialLink,
}

/// One recognition tier. Several tiers can serve the same [`FactKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleId {
    CompanyOverride,
    CompanyLogoAlt,
    CompanyTitle,
    CompanyDomain,
    Email,
    Phone,
    AddressContact,
    AddressMicrodata,
    AddressPage,
    Hours,
    Service,
    TestimonialMarkup,
    TestimonialQuote,
    TestimonialText,
    Social(Platform),
}

impl RuleId {
    pub fn kind(&self) -> FactKind {
        match self {
            RuleId::CompanyOverride
            | RuleId::CompanyLogoAlt
            | RuleId::CompanyTitle
            | RuleId::CompanyDomain => FactKind::CompanyName,
            RuleId::Email => FactKind::Email,
            RuleId::Phone => FactKind::Phone,
            RuleId::AddressContact | RuleId::AddressMicrodata | RuleId::AddressPage => {
                FactKind::Address
            }
            RuleId::Hours => FactKind::Hours,
            RuleId::Service => FactKind::Service,
            RuleId::TestimonialMarkup | RuleId::TestimonialQuote | RuleId::TestimonialText => {
                FactKind::Testimonial
            }
            RuleId::Social(_) => FactKind::SocialLink,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RuleId::CompanyOverride => "company.override",
            RuleId::CompanyLogoAlt => "company.logo_alt",
            RuleId::CompanyTitle => "company.title",
            RuleId::CompanyDomain => "company.domain",
            RuleId::Email => "email",
            RuleId::Phone => "phone",
            RuleId::AddressContact => "address.contact",
            RuleId::AddressMicrodata => "address.microdata",
            RuleId::AddressPage => "address.page",
            RuleId::Hours => "hours",
            RuleId::Service => "service",
            RuleId::TestimonialMarkup => "testimonial.markup",
            RuleId::TestimonialQuote => "testimonial.quote",
            RuleId::TestimonialText => "testimonial.text",
            RuleId::Social(Platform::Facebook) => "social.facebook",
            RuleId::Social(Platform::LinkedIn) => "social.linkedin",
            RuleId::Social(Platform::Instagram) => "social.instagram",
            RuleId::Social(Platform::Twitter) => "social.twitter",
        }
    }
}

/// Accepted text length, counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    min: usize,
    max: usize,
    inclusive: bool,
}

impl LengthBounds {
    /// `min < len < max`
    pub const fn exclusive(min: usize, max: usize) -> Self {
        Self { min, max, inclusive: false }
    }

    /// `min <= len <= max`
    pub const fn inclusive(min: usize, max: usize) -> Self {
        Self { min, max, inclusive: true }
    }

    /// Any non-empty text.
    pub const fn any() -> Self {
        Self::inclusive(1, usize::MAX)
    }

    pub fn contains(&self, text: &str) -> bool {
        let len = text.chars().count();
        if self.inclusive {
            self.min <= len && len <= self.max
        } else {
            self.min < len && len < self.max
        }
    }
}

/// Elements whose attribute matches a regex, e.g. `class~=contact`.
#[derive(Debug, Clone)]
pub struct AttrQuery {
    /// Tag names to consider; empty means every element.
    pub tags: Vec<String>,
    pub attr: String,
    pub pattern: Regex,
}

/// Where a rule looks for candidates.
#[derive(Debug, Clone)]
pub enum Scope {
    /// Flattened page text (or raw HTML for social links).
    Page,
    /// CSS selectors, tried in order.
    Css(Vec<Selector>),
    Attribute(AttrQuery),
}

#[derive(Debug, Clone)]
pub struct PatternRule {
    pub id: RuleId,
    pub scope: Scope,
    pub patterns: Vec<Regex>,
    pub exclusions: Vec<Regex>,
    pub bounds: LengthBounds,
}

impl PatternRule {
    fn new(id: RuleId, scope: Scope, bounds: LengthBounds) -> Self {
        Self {
            id,
            scope,
            patterns: Vec::new(),
            exclusions: Vec::new(),
            bounds,
        }
    }

    fn with_patterns(mut self, patterns: Vec<Regex>) -> Self {
        self.patterns = patterns;
        self
    }

    fn with_exclusions(mut self, exclusions: Vec<Regex>) -> Self {
        self.exclusions = exclusions;
        self
    }

    /// True when any exclusion matches.
    pub fn is_excluded(&self, text: &str) -> bool {
        self.exclusions.iter().any(|re| re.is_match(text))
    }

    /// Elements in this rule's scope, selector by selector, in document order.
    pub fn elements<'a>(&self, doc: &'a Document) -> Vec<ElementRef<'a>> {
        match &self.scope {
            Scope::Page => Vec::new(),
            Scope::Css(selectors) => selectors
                .iter()
                .flat_map(|sel| doc.select(sel).collect::<Vec<_>>())
                .collect(),
            Scope::Attribute(q) => doc.select_by_attr(&q.tags, &q.attr, &q.pattern),
        }
    }
}

/// Maps a domain fragment to a company name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameOverride {
    pub fragment: String,
    pub name: String,
}

/// Canned services for domains containing any trigger keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceFallback {
    pub triggers: Vec<String>,
    pub services: Vec<String>,
}

/// Lookup tables behind the pattern library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PatternConfig {
    /// Exact domain (no `www.`) to company name.
    pub company_overrides: BTreeMap<String, String>,
    /// Checked in order when no exact override matches.
    pub company_fragments: Vec<NameOverride>,
    pub brand_selectors: Vec<String>,
    pub junk_phrases: Vec<String>,
    /// Case-insensitive regexes for company boilerplate posing as reviews.
    pub testimonial_denylist: Vec<String>,
    pub review_vocabulary: Vec<String>,
    pub min_review_terms: usize,
    pub service_keywords: Vec<String>,
    pub service_fallbacks: Vec<ServiceFallback>,
    pub default_services: Vec<String>,
    pub service_cap: usize,
    pub testimonial_cap: usize,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            company_overrides: rules::COMPANY_OVERRIDES
                .iter()
                .map(|(d, n)| (d.to_string(), n.to_string()))
                .collect(),
            company_fragments: rules::COMPANY_FRAGMENTS
                .iter()
                .map(|(f, n)| NameOverride {
                    fragment: f.to_string(),
                    name: n.to_string(),
                })
                .collect(),
            brand_selectors: owned(rules::BRAND_SELECTORS),
            junk_phrases: owned(rules::JUNK_PHRASES),
            testimonial_denylist: owned(rules::TESTIMONIAL_DENYLIST),
            review_vocabulary: owned(rules::REVIEW_VOCABULARY),
            min_review_terms: 2,
            service_keywords: owned(rules::SERVICE_KEYWORDS),
            service_fallbacks: rules::SERVICE_FALLBACKS
                .iter()
                .map(|(triggers, services)| ServiceFallback {
                    triggers: owned(triggers),
                    services: owned(services),
                })
                .collect(),
            default_services: owned(rules::DEFAULT_SERVICES),
            service_cap: 6,
            testimonial_cap: 5,
        }
    }
}

static STANDARD: Lazy<PatternLibrary> = Lazy::new(|| {
    PatternLibrary::new(&PatternConfig::default()).expect("default pattern tables compile")
});

/// Compiled rules plus the lookup tables the extractors consult.
#[derive(Debug, Clone)]
pub struct PatternLibrary {
    rules: BTreeMap<RuleId, PatternRule>,
    company_overrides: BTreeMap<String, String>,
    company_fragments: Vec<NameOverride>,
    review_vocabulary: Vec<String>,
    min_review_terms: usize,
    service_keywords: Vec<String>,
    service_fallbacks: Vec<ServiceFallback>,
    default_services: Vec<String>,
    service_cap: usize,
    testimonial_cap: usize,
}

impl Default for PatternLibrary {
    fn default() -> Self {
        Self::standard().clone()
    }
}

impl PatternLibrary {
    /// Process-wide library built from the default tables.
    pub fn standard() -> &'static PatternLibrary {
        &STANDARD
    }

    /// Compile every rule. Fails on the first bad regex or selector.
    pub fn new(config: &PatternConfig) -> Result<Self> {
        let junk = config
            .junk_phrases
            .iter()
            .map(|p| phrase(p))
            .collect::<Result<Vec<_>>>()?;
        let denylist = config
            .testimonial_denylist
            .iter()
            .map(|p| regex("testimonial_denylist", &format!("(?i){p}")))
            .collect::<Result<Vec<_>>>()?;
        let brand = config
            .brand_selectors
            .iter()
            .map(|s| selector("brand_selectors", s))
            .collect::<Result<Vec<_>>>()?;

        let mut table = vec![
            PatternRule::new(RuleId::CompanyOverride, Scope::Page, LengthBounds::any()),
            PatternRule::new(
                RuleId::CompanyLogoAlt,
                Scope::Css(brand),
                LengthBounds::exclusive(2, 50),
            )
            .with_exclusions(vec![regex("company.logo_alt", "(?i)logo")?]),
            PatternRule::new(
                RuleId::CompanyTitle,
                Scope::Css(vec![selector("company.title", "title")?]),
                LengthBounds::exclusive(3, 50),
            ),
            PatternRule::new(RuleId::CompanyDomain, Scope::Page, LengthBounds::any()),
            PatternRule::new(RuleId::Email, Scope::Page, LengthBounds::any())
                .with_patterns(vec![regex("email", rules::EMAIL)?]),
            PatternRule::new(RuleId::Phone, Scope::Page, LengthBounds::any())
                .with_patterns(vec![regex("phone", rules::PHONE)?]),
            PatternRule::new(
                RuleId::AddressContact,
                Scope::Attribute(AttrQuery {
                    tags: owned(&["div", "section"]),
                    attr: "class".into(),
                    pattern: regex("address.contact", rules::CONTACT_CLASS)?,
                }),
                LengthBounds::exclusive(25, 120),
            )
            .with_patterns(vec![regex("address.contact", &rules::street_address_loose())?]),
            PatternRule::new(
                RuleId::AddressMicrodata,
                Scope::Attribute(AttrQuery {
                    tags: Vec::new(),
                    attr: "itemprop".into(),
                    pattern: regex("address.microdata", rules::ADDRESS_ITEMPROP)?,
                }),
                LengthBounds::exclusive(15, 100),
            ),
            PatternRule::new(RuleId::AddressPage, Scope::Page, LengthBounds::exclusive(25, 120))
                .with_patterns(vec![
                    regex("address.page", &rules::street_address_with_zip())?,
                    regex("address.page", &rules::street_address())?,
                ])
                .with_exclusions(junk.clone()),
            PatternRule::new(RuleId::Hours, Scope::Page, LengthBounds::exclusive(10, 80))
                .with_patterns(
                    rules::HOURS
                        .iter()
                        .map(|p| regex("hours", p))
                        .collect::<Result<Vec<_>>>()?,
                )
                .with_exclusions(junk),
            PatternRule::new(
                RuleId::Service,
                Scope::Css(vec![selector("service", rules::SERVICE_SELECTOR)?]),
                LengthBounds::exclusive(5, 60),
            ),
            PatternRule::new(
                RuleId::TestimonialMarkup,
                Scope::Attribute(AttrQuery {
                    tags: owned(rules::REVIEW_TAGS),
                    attr: "class".into(),
                    pattern: regex("testimonial.markup", rules::REVIEW_CLASS)?,
                }),
                LengthBounds::inclusive(20, 300),
            )
            .with_exclusions(denylist.clone()),
            PatternRule::new(
                RuleId::TestimonialQuote,
                Scope::Css(vec![selector("testimonial.quote", rules::QUOTE_SELECTOR)?]),
                LengthBounds::inclusive(20, 300),
            )
            .with_exclusions(denylist.clone()),
            PatternRule::new(RuleId::TestimonialText, Scope::Page, LengthBounds::inclusive(20, 300))
                .with_patterns(
                    rules::TESTIMONIAL_TEXT
                        .iter()
                        .map(|p| regex("testimonial.text", p))
                        .collect::<Result<Vec<_>>>()?,
                )
                .with_exclusions(denylist),
        ];
        for (platform, pattern) in rules::SOCIAL {
            let id = RuleId::Social(*platform);
            table.push(
                PatternRule::new(id, Scope::Page, LengthBounds::any())
                    .with_patterns(vec![regex(id.name(), pattern)?]),
            );
        }

        Ok(Self {
            rules: table.into_iter().map(|r| (r.id, r)).collect(),
            company_overrides: config
                .company_overrides
                .iter()
                .map(|(d, n)| (Domain::from_raw(d).0, n.clone()))
                .collect(),
            company_fragments: config.company_fragments.clone(),
            review_vocabulary: config
                .review_vocabulary
                .iter()
                .map(|t| t.to_lowercase())
                .collect(),
            min_review_terms: config.min_review_terms,
            service_keywords: config
                .service_keywords
                .iter()
                .map(|k| k.to_lowercase())
                .collect(),
            service_fallbacks: config.service_fallbacks.clone(),
            default_services: config.default_services.clone(),
            service_cap: config.service_cap,
            testimonial_cap: config.testimonial_cap,
        })
    }

    pub fn rule(&self, id: RuleId) -> Result<&PatternRule> {
        self.rules
            .get(&id)
            .ok_or_else(|| SiteFactsError::pattern(id.name(), "no rule registered"))
    }

    /// Known company name for a domain: exact match first, then fragments.
    pub fn company_override(&self, domain: &Domain) -> Option<&str> {
        if let Some(name) = self.company_overrides.get(&domain.0) {
            return Some(name.as_str());
        }
        self.company_fragments
            .iter()
            .find(|o| domain.0.contains(&o.fragment.to_lowercase()))
            .map(|o| o.name.as_str())
    }

    /// True when the text mentions any service keyword.
    pub fn is_service_like(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.service_keywords.iter().any(|k| lower.contains(k.as_str()))
    }

    /// Number of distinct review-vocabulary terms in the text.
    pub fn review_terms(&self, text: &str) -> usize {
        let lower = text.to_lowercase();
        self.review_vocabulary
            .iter()
            .filter(|t| lower.contains(t.as_str()))
            .count()
    }

    pub fn min_review_terms(&self) -> usize {
        self.min_review_terms
    }

    /// Canned services for a host, picked by the first matching trigger set.
    pub fn service_fallback(&self, host: &str) -> &[String] {
        let host = host.to_lowercase();
        self.service_fallbacks
            .iter()
            .find(|f| f.triggers.iter().any(|t| host.contains(&t.to_lowercase())))
            .map(|f| f.services.as_slice())
            .unwrap_or(&self.default_services)
    }

    pub fn service_cap(&self) -> usize {
        self.service_cap
    }

    pub fn testimonial_cap(&self) -> usize {
        self.testimonial_cap
    }
}

fn regex(name: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| SiteFactsError::pattern(name, e))
}

fn phrase(text: &str) -> Result<Regex> {
    regex("junk_phrases", &format!("(?i){}", regex::escape(text)))
}

fn selector(name: &str, css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| SiteFactsError::pattern(name, format!("{css}: {e:?}")))
}
