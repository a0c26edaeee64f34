//! Multi-Page Aggregator
//!
//! Folds per-page records into one site record. Pure: inputs are never
//! touched and page order decides every first-wins field.

mod tests;

use crate::tools::dedupe::{dedupe, suppress_contained, SIMILARITY_THRESHOLD};
use crate::types::{FactRecord, ServiceOrigin};

/// Pages consumed when the caller does not say otherwise.
pub const DEFAULT_PAGE_CAP: usize = 2;
pub const SERVICE_CAP: usize = 6;
pub const TESTIMONIAL_CAP: usize = 3;

/// Merge at most `page_cap` records, in the order given.
///
/// - company name, address, hours: first page with a value wins
/// - emails, phones: set union
/// - services: extracted names in first-seen order with containment
///   suppression; a canned fallback list is used only when no page
///   extracted anything
/// - testimonials: first-seen order with near-duplicate suppression
/// - social links: a platform found earlier is never overwritten
pub fn aggregate(records: &[FactRecord], page_cap: usize) -> FactRecord {
    let pages = &records[..records.len().min(page_cap)];
    let mut site = FactRecord::default();

    let mut extracted = Vec::new();
    let mut fallback: Option<&Vec<String>> = None;
    let mut testimonials = Vec::new();

    for page in pages {
        if site.company_name.is_none() {
            site.company_name = page.company_name.clone();
        }
        if site.address.is_none() {
            site.address = page.address.clone();
        }
        if site.hours.is_none() {
            site.hours = page.hours.clone();
        }
        site.emails.extend(page.emails.iter().cloned());
        site.phones.extend(page.phones.iter().cloned());

        match page.service_origin {
            ServiceOrigin::Extracted => extracted.extend(page.services.iter().cloned()),
            ServiceOrigin::Fallback => {
                if fallback.is_none() && !page.services.is_empty() {
                    fallback = Some(&page.services);
                }
            }
        }
        testimonials.extend(page.testimonials.iter().cloned());

        for (platform, link) in &page.social_media {
            site.social_media
                .entry(*platform)
                .or_insert_with(|| link.clone());
        }
    }

    let mut services = suppress_contained(extracted);
    services.truncate(SERVICE_CAP);
    match fallback {
        Some(canned) if services.is_empty() => {
            site.services = canned.clone();
            site.service_origin = ServiceOrigin::Fallback;
        }
        _ => site.services = services,
    }

    site.testimonials = dedupe(testimonials, SIMILARITY_THRESHOLD);
    site.testimonials.truncate(TESTIMONIAL_CAP);
    site
}
