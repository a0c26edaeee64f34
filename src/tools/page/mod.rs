//! Page Extraction Orchestrator
//!
//! Runs every extractor against one document, normalizes and validates
//! each candidate, and assembles the page's [`FactRecord`]. A failing or
//! panicking extractor costs only its own field.


use crate::document::Document;
use crate::error::Result;
use crate::tools::clean::normalize;
use crate::tools::extract::{
    extractor, finalize_services, finalize_testimonials, Extractor, PageContext,
};
use crate::tools::patterns::{FactKind, PatternLibrary, RuleId};
use crate::tools::types::Candidate;
use crate::tools::validate::accepts;
use crate::types::FactRecord;
use std::collections::{BTreeMap, BTreeSet};
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, trace, warn};

/// Extract every fact from one page. Never fails.
pub fn extract_page(doc: &Document, url: &str, lib: &PatternLibrary) -> FactRecord {
    extract_page_using(doc, url, lib, extractor)
}

/// Same as [`extract_page`] with a custom extractor lookup.
pub(crate) fn extract_page_using(
    doc: &Document,
    url: &str,
    lib: &PatternLibrary,
    lookup: fn(FactKind) -> &'static dyn Extractor,
) -> FactRecord {
    let ctx = PageContext::new(doc, url, lib);
    let company_name = isolate(lookup(FactKind::CompanyName), url, |ex| first_accepted(&ctx, ex));
    let emails: BTreeSet<String> = isolate(lookup(FactKind::Email), url, |ex| {
        Ok(texts(accepted(&ctx, ex)?).into_iter().collect())
    });
    let phones: BTreeSet<String> = isolate(lookup(FactKind::Phone), url, |ex| {
        Ok(texts(accepted(&ctx, ex)?).into_iter().collect())
    });
    let address = isolate(lookup(FactKind::Address), url, |ex| first_accepted(&ctx, ex));
    let hours = isolate(lookup(FactKind::Hours), url, |ex| first_accepted(&ctx, ex));
    let (services, service_origin) = isolate(lookup(FactKind::Service), url, |ex| {
        let found = texts(accepted(&ctx, ex)?);
        Ok(finalize_services(lib, &ctx.host(), found))
    });
    let testimonials = isolate(lookup(FactKind::Testimonial), url, |ex| {
        let found = texts(accepted(&ctx, ex)?);
        Ok(finalize_testimonials(lib, found))
    });
    let social_media = isolate(lookup(FactKind::SocialLink), url, |ex| {
        let mut links = BTreeMap::new();
        for cand in accepted(&ctx, ex)? {
            if let RuleId::Social(platform) = cand.rule {
                links.entry(platform).or_insert(cand.text);
            }
        }
        Ok(links)
    });

    let record = FactRecord {
        company_name,
        emails,
        phones,
        address,
        hours,
        services,
        service_origin,
        testimonials,
        social_media,
    };
    debug!(
        url,
        company = record.company_name.as_deref().unwrap_or("-"),
        emails = record.emails.len(),
        phones = record.phones.len(),
        services = record.services.len(),
        testimonials = record.testimonials.len(),
        socials = record.social_media.len(),
        "page extracted"
    );
    record
}

/// Run one field's extraction, turning an error or a panic into the
/// field's empty value.
fn isolate<T: Default>(
    ex: &dyn Extractor,
    url: &str,
    f: impl FnOnce(&dyn Extractor) -> Result<T>,
) -> T {
    match panic::catch_unwind(AssertUnwindSafe(|| f(ex))) {
        Ok(Ok(value)) => value,
        Ok(Err(e)) => {
            warn!(field = ?ex.kind(), url, error = %e, "extractor failed, field left empty");
            T::default()
        }
        Err(_) => {
            warn!(field = ?ex.kind(), url, "extractor panicked, field left empty");
            T::default()
        }
    }
}

/// Normalize a candidate and keep it only if its rule accepts it.
fn screen<'a>(ctx: &PageContext<'a>, mut cand: Candidate<'a>) -> Result<Option<Candidate<'a>>> {
    cand.text = normalize(&cand.text);
    if accepts(ctx.patterns, cand.rule, &cand.text)? {
        Ok(Some(cand))
    } else {
        trace!(rule = cand.rule.name(), text = %cand.text, tag = ?cand.source_tag(), "candidate rejected");
        Ok(None)
    }
}

fn accepted<'a>(ctx: &PageContext<'a>, ex: &dyn Extractor) -> Result<Vec<Candidate<'a>>> {
    let mut kept = Vec::new();
    for cand in ex.candidates(ctx)? {
        if let Some(cand) = screen(ctx, cand)? {
            kept.push(cand);
        }
    }
    Ok(kept)
}

/// First candidate that survives screening; later ones are never looked at.
fn first_accepted(ctx: &PageContext<'_>, ex: &dyn Extractor) -> Result<Option<String>> {
    for cand in ex.candidates(ctx)? {
        if let Some(cand) = screen(ctx, cand)? {
            return Ok(Some(cand.text));
        }
    }
    Ok(None)
}

fn texts(cands: Vec<Candidate<'_>>) -> Vec<String> {
    cands.into_iter().map(|c| c.text).collect()
}
