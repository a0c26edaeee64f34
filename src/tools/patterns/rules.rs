//! Default pattern tables.
//!
//! Regexes for fact shapes are fixed; the lookup tables (overrides,
//! denylists, vocabularies, fallbacks) seed [`super::PatternConfig`] and can
//! be replaced from the config file.

pub(super) const EMAIL: &str = r"(?i)\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";

/// Area, exchange and line captured separately so any punctuation renders
/// the same canonical number.
pub(super) const PHONE: &str = r"\b\(?([0-9]{3})\)?[-.\s]?([0-9]{3})[-.\s]?([0-9]{4})\b";

const STREET_TYPES: &str = "(?:Street|Avenue|Road|Boulevard|Drive|Lane|St|Ave|Rd|Blvd|Dr|Way)";

pub(super) fn street_address_loose() -> String {
    format!(r"(?i)\d+\s+[A-Za-z\s]+{STREET_TYPES}\s*,?\s*[A-Za-z\s]+,\s*[A-Z]{{2}}")
}

pub(super) fn street_address_with_zip() -> String {
    format!(r"(?i)\d+\s+[A-Za-z\s]+{STREET_TYPES}\s*,\s*[A-Za-z\s]+,\s*[A-Z]{{2}}\s*\d{{5}}")
}

pub(super) fn street_address() -> String {
    format!(r"(?i)\d+\s+[A-Za-z\s]+{STREET_TYPES}\s*,\s*[A-Za-z\s]+,\s*[A-Z]{{2}}")
}

pub(super) const CONTACT_CLASS: &str = r"(?i)contact|address|location";
pub(super) const ADDRESS_ITEMPROP: &str = r"(?i)address|streetAddress";

pub(super) const HOURS: &[&str] = &[
    r"(?i)(?:Mon|Monday)\s*[-–]?\s*(?:Fri|Friday)\s*:?\s*\d{1,2}:\d{2}\s*(?:AM|PM)\s*[-–]\s*\d{1,2}:\d{2}\s*(?:AM|PM)",
    r"(?i)(?:Mon|Monday)\s+through\s+(?:Fri|Friday)\s*:?\s*\d{1,2}:\d{2}\s*(?:AM|PM)\s*[-–]\s*\d{1,2}:\d{2}\s*(?:AM|PM)",
    r"(?i)(?:Monday|Mon)\s*[-–]\s*(?:Friday|Fri)\s*:?\s*\d{1,2}:\d{2}\s*(?:AM|PM)\s*[-–]\s*\d{1,2}:\d{2}\s*(?:AM|PM)",
];

pub(super) const SERVICE_SELECTOR: &str = "h1, h2, h3, h4, nav, ul, li, div";

pub(super) const REVIEW_CLASS: &str = r"(?i)review|testimonial|feedback|comment";
pub(super) const REVIEW_TAGS: &[&str] = &["div", "p", "blockquote", "span"];
pub(super) const QUOTE_SELECTOR: &str = "blockquote, q";

pub(super) const TESTIMONIAL_TEXT: &[&str] = &[
    r#""([^"]{30,200})""#,
    r"[A-Z][a-z]+\s+[A-Z]\.\s+[^.]{30,200}\.",
];

pub(super) const SOCIAL: &[(crate::types::Platform, &str)] = &[
    (crate::types::Platform::Facebook, r"(?i)facebook\.com/[a-zA-Z0-9._-]+"),
    (crate::types::Platform::LinkedIn, r"(?i)linkedin\.com/company/[a-zA-Z0-9._-]+"),
    (crate::types::Platform::Instagram, r"(?i)instagram\.com/[a-zA-Z0-9._-]+"),
    (crate::types::Platform::Twitter, r"(?i)twitter\.com/[a-zA-Z0-9._-]+"),
];

/* ---------- configurable tables ---------- */

pub(super) const COMPANY_OVERRIDES: &[(&str, &str)] = &[
    ("belred.com", "Belred"),
    ("fissionlabs.com", "Fission Labs"),
    ("microsoft.com", "Microsoft"),
    ("google.com", "Google"),
    ("amazon.com", "Amazon"),
    ("apple.com", "Apple"),
];

pub(super) const COMPANY_FRAGMENTS: &[(&str, &str)] =
    &[("belred", "Belred"), ("fission", "Fission Labs")];

pub(super) const BRAND_SELECTORS: &[&str] = &[
    r#"img[alt*="logo"]"#,
    r#"img[alt*="brand"]"#,
    r#"img[class*="logo"]"#,
    ".logo img",
    ".brand img",
    ".header-logo img",
    r#"[class*="logo"] img"#,
    r#"[class*="brand"] img"#,
];

pub(super) const JUNK_PHRASES: &[&str] = &[
    "emergency service",
    "quick links",
    "book now",
    "financing",
    "careers",
    "blog",
    "customer tools",
    "comfort",
    "care",
    "years",
    "looking forward",
    "about us",
    "our company",
];

pub(super) const TESTIMONIAL_DENYLIST: &[&str] = &[
    r"we credit our success",
    r"about us",
    r"our company",
    r"quick links",
    r"book now",
    r"financing",
    r"careers",
    r"emergency service",
    r"years?\s+&\s+are\s+looking\s+forward",
    r"superior products that res",
    r"hard-working employees",
];

pub(super) const REVIEW_VOCABULARY: &[&str] = &[
    "recommend",
    "excellent",
    "professional",
    "great",
    "satisfied",
    "outstanding",
    "quality",
    "amazing",
    "fantastic",
    "helpful",
    "installed",
    "service",
    "work",
    "team",
    "staff",
    "technician",
    "quick",
    "fast",
    "reliable",
    "trust",
    "experience",
    "pleased",
];

pub(super) const SERVICE_KEYWORDS: &[&str] = &[
    "solution",
    "service",
    "product",
    "offering",
    "platform",
    "technology",
    "consulting",
    "analytics",
    "intelligence",
    "ai",
    "data",
    "machine learning",
    "automation",
    "optimization",
    "installation",
    "repair",
    "maintenance",
    "hvac",
    "heating",
    "cooling",
    "air conditioning",
    "furnace",
    "plumbing",
    "development",
    "engineering",
    "cloud",
    "mobile",
    "web",
];

pub(super) const SERVICE_FALLBACKS: &[(&[&str], &[&str])] = &[
    (
        &["hvac", "heating", "cooling", "air", "belred"],
        &["HVAC Services", "Heating & Cooling", "Equipment Installation"],
    ),
    (
        &["fission", "tech", "labs"],
        &["Software Development", "AI & ML Solutions", "Cloud Services"],
    ),
];

pub(super) const DEFAULT_SERVICES: &[&str] =
    &["Professional Services", "Business Solutions", "Customer Support"];
