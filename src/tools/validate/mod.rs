//! Per-fact predicates that accept or reject a normalized candidate.
//!
//! A rejected candidate is simply dropped. Nothing here is an error.

mod tests;
mod utils;

use crate::error::Result;
use crate::tools::patterns::{PatternLibrary, RuleId};
use utils::*;

/// Decide whether normalized `text` may enter a record under rule `id`.
///
/// Every rule checks non-emptiness, its length bounds and its exclusion
/// list. Some tiers add a shape check on top:
/// - microdata addresses must contain a digit
/// - services must not look like a phone, email, link or bare number
/// - testimonials must use enough review vocabulary
pub fn accepts(lib: &PatternLibrary, id: RuleId, text: &str) -> Result<bool> {
    let rule = lib.rule(id)?;
    if text.is_empty() || !rule.bounds.contains(text) || rule.is_excluded(text) {
        return Ok(false);
    }
    let shaped = match id {
        RuleId::AddressMicrodata => text.chars().any(|c| c.is_ascii_digit()),
        RuleId::Service => is_valid_service(text),
        RuleId::TestimonialMarkup | RuleId::TestimonialQuote | RuleId::TestimonialText => {
            has_review_vocabulary(lib, text)
        }
        _ => true,
    };
    Ok(shaped)
}

/// Reject service text that is really contact data, a link or a number.
pub fn is_valid_service(text: &str) -> bool {
    if text.chars().count() < 3 {
        return false;
    }
    if PHONE_SHAPE.is_match(text) || EMAIL_SHAPE.is_match(text) {
        return false;
    }
    if LINK_PREFIXES.iter().any(|p| text.starts_with(p)) {
        return false;
    }
    !NUMERIC_ONLY.is_match(text)
}

/// True when the text uses at least the configured number of review terms.
pub fn has_review_vocabulary(lib: &PatternLibrary, text: &str) -> bool {
    lib.review_terms(text) >= lib.min_review_terms()
}
