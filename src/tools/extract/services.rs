use super::{Extractor, PageContext};
use crate::document::element_text;
use crate::error::Result;
use crate::tools::clean::clean_service;
use crate::tools::dedupe::suppress_contained;
use crate::tools::patterns::{FactKind, LengthBounds, PatternLibrary, RuleId};
use crate::tools::types::Candidate;
use crate::types::ServiceOrigin;
use scraper::ElementRef;
use std::collections::HashSet;

/// Raw element text must fit here before any cleanup happens.
const ELEMENT_BOUNDS: LengthBounds = LengthBounds::inclusive(3, 80);

/// Headings, navigation, lists and containers whose text mentions a
/// service keyword, cleaned into a service name.
pub struct ServiceExtractor;

impl Extractor for ServiceExtractor {
    fn kind(&self) -> FactKind {
        FactKind::Service
    }

    fn candidates<'a>(&self, ctx: &PageContext<'a>) -> Result<Vec<Candidate<'a>>> {
        let rule = ctx.patterns.rule(RuleId::Service)?;
        let matched: Vec<(ElementRef<'a>, String)> = rule
            .elements(ctx.doc)
            .into_iter()
            .map(|el| {
                let text = element_text(&el);
                (el, text)
            })
            .filter(|(_, text)| {
                ELEMENT_BOUNDS.contains(text) && ctx.patterns.is_service_like(text)
            })
            .collect();

        // A list or nav whose items match on their own only repeats them.
        let ids: HashSet<_> = matched.iter().map(|(el, _)| el.id()).collect();
        let found = matched
            .into_iter()
            .filter(|(el, _)| !el.descendants().skip(1).any(|n| ids.contains(&n.id())))
            .map(|(el, text)| Candidate::from_element(rule.id, clean_service(&text), el))
            .collect();
        Ok(found)
    }
}

/// Turn accepted service names into the page's final list: containment
/// suppression, the cap, and the canned fallback when nothing survived.
pub fn finalize_services(
    lib: &PatternLibrary,
    host: &str,
    accepted: Vec<String>,
) -> (Vec<String>, ServiceOrigin) {
    let mut services = suppress_contained(accepted);
    services.truncate(lib.service_cap());
    if services.is_empty() {
        let fallback = lib.service_fallback(host).to_vec();
        return (fallback, ServiceOrigin::Fallback);
    }
    (services, ServiceOrigin::Extracted)
}
