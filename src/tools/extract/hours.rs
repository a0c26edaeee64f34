use super::utils::regex_candidates;
use super::{Extractor, PageContext};
use crate::error::Result;
use crate::tools::patterns::{FactKind, RuleId};
use crate::tools::types::Candidate;

/// Weekday opening hours such as `Mon-Fri: 8:00 AM - 5:00 PM`.
pub struct HoursExtractor;

impl Extractor for HoursExtractor {
    fn kind(&self) -> FactKind {
        FactKind::Hours
    }

    fn candidates<'a>(&self, ctx: &PageContext<'a>) -> Result<Vec<Candidate<'a>>> {
        let rule = ctx.patterns.rule(RuleId::Hours)?;
        Ok(regex_candidates(rule, ctx.doc.text()))
    }
}
