use once_cell::sync::Lazy;
use regex::Regex;

pub(super) static PHONE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").expect("valid regex"));

pub(super) static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("valid regex")
});

pub(super) static NUMERIC_ONLY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\d\s\-()]+$").expect("valid regex"));

pub(super) const LINK_PREFIXES: &[&str] = &["http", "/", "www."];
