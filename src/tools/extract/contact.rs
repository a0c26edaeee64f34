use super::utils::regex_candidates;
use super::{Extractor, PageContext};
use crate::error::Result;
use crate::tools::clean::canonical_phone;
use crate::tools::patterns::{FactKind, RuleId};
use crate::tools::types::Candidate;

/// `local@domain.tld` anywhere in the page text.
pub struct EmailExtractor;

impl Extractor for EmailExtractor {
    fn kind(&self) -> FactKind {
        FactKind::Email
    }

    fn candidates<'a>(&self, ctx: &PageContext<'a>) -> Result<Vec<Candidate<'a>>> {
        let rule = ctx.patterns.rule(RuleId::Email)?;
        Ok(regex_candidates(rule, ctx.doc.text()))
    }
}

/// Ten-digit numbers in the page text, rendered as `(NNN) NNN-NNNN`.
pub struct PhoneExtractor;

impl Extractor for PhoneExtractor {
    fn kind(&self) -> FactKind {
        FactKind::Phone
    }

    fn candidates<'a>(&self, ctx: &PageContext<'a>) -> Result<Vec<Candidate<'a>>> {
        let rule = ctx.patterns.rule(RuleId::Phone)?;
        let mut found = Vec::new();
        for re in &rule.patterns {
            for caps in re.captures_iter(ctx.doc.text()) {
                let digits: String = (1..=3)
                    .filter_map(|i| caps.get(i))
                    .map(|m| m.as_str())
                    .collect();
                if let Some(phone) = canonical_phone(&digits) {
                    found.push(Candidate::new(RuleId::Phone, phone));
                }
            }
        }
        Ok(found)
    }
}
