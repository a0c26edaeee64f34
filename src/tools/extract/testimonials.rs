use super::utils::regex_candidates;
use super::{Extractor, PageContext};
use crate::document::element_text;
use crate::error::Result;
use crate::merge;
use crate::tools::dedupe::{dedupe, SIMILARITY_THRESHOLD};
use crate::tools::patterns::{FactKind, PatternLibrary, RuleId};
use crate::tools::types::Candidate;

/// Review-styled markup, `<blockquote>`/`<q>` elements, and quoted or
/// signed sentences in the page text, mined in that order.
pub struct TestimonialExtractor;

impl Extractor for TestimonialExtractor {
    fn kind(&self) -> FactKind {
        FactKind::Testimonial
    }

    fn candidates<'a>(&self, ctx: &PageContext<'a>) -> Result<Vec<Candidate<'a>>> {
        let from_elements = |id: RuleId| -> Result<Vec<Candidate<'a>>> {
            let found = ctx
                .patterns
                .rule(id)?
                .elements(ctx.doc)
                .into_iter()
                .map(|el| Candidate::from_element(id, element_text(&el), el))
                .collect();
            Ok(found)
        };
        let text = ctx.patterns.rule(RuleId::TestimonialText)?;
        Ok(merge!(
            from_elements(RuleId::TestimonialMarkup)?,
            from_elements(RuleId::TestimonialQuote)?,
            regex_candidates(text, ctx.doc.text()),
        ))
    }
}

/// Collapse exact and near-duplicate testimonials, then cap the list.
pub fn finalize_testimonials(lib: &PatternLibrary, accepted: Vec<String>) -> Vec<String> {
    let mut kept = dedupe(accepted, SIMILARITY_THRESHOLD);
    kept.truncate(lib.testimonial_cap());
    kept
}
