//! Common types shared across tools

use crate::tools::patterns::RuleId;
use scraper::ElementRef;

/// An untrusted string pulled from a page, tagged with the rule that found it.
///
/// Candidates live only inside one extraction pass; nothing outside the page
/// orchestrator ever sees one.
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    pub rule: RuleId,
    pub text: String,
    pub source: Option<ElementRef<'a>>,
}

impl<'a> Candidate<'a> {
    pub fn new(rule: RuleId, text: impl Into<String>) -> Self {
        Self {
            rule,
            text: text.into(),
            source: None,
        }
    }

    pub fn from_element(rule: RuleId, text: impl Into<String>, source: ElementRef<'a>) -> Self {
        Self {
            rule,
            text: text.into(),
            source: Some(source),
        }
    }

    /// Tag name of the element the text came from, if any.
    pub fn source_tag(&self) -> Option<&str> {
        self.source.as_ref().map(|el| el.value().name())
    }
}
