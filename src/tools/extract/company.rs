use super::{Extractor, PageContext};
use crate::document::element_text;
use crate::error::Result;
use crate::tools::clean::{clean_title, strip_logo_token, title_case};
use crate::tools::patterns::{FactKind, RuleId};
use crate::tools::types::Candidate;

/// Known override, then logo/brand image alt text, then the page title,
/// then the title-cased first label of the domain.
pub struct CompanyExtractor;

impl Extractor for CompanyExtractor {
    fn kind(&self) -> FactKind {
        FactKind::CompanyName
    }

    fn candidates<'a>(&self, ctx: &PageContext<'a>) -> Result<Vec<Candidate<'a>>> {
        let domain = ctx.domain()?;
        if let Some(name) = ctx.patterns.company_override(&domain) {
            return Ok(vec![Candidate::new(RuleId::CompanyOverride, name)]);
        }

        let mut found = Vec::new();
        for img in ctx.patterns.rule(RuleId::CompanyLogoAlt)?.elements(ctx.doc) {
            if let Some(alt) = img.value().attr("alt") {
                found.push(Candidate::from_element(
                    RuleId::CompanyLogoAlt,
                    strip_logo_token(alt),
                    img,
                ));
            }
        }
        if let Some(title) = ctx.patterns.rule(RuleId::CompanyTitle)?.elements(ctx.doc).first() {
            found.push(Candidate::from_element(
                RuleId::CompanyTitle,
                clean_title(&element_text(title)),
                *title,
            ));
        }
        found.push(Candidate::new(
            RuleId::CompanyDomain,
            title_case(domain.first_label()),
        ));
        Ok(found)
    }
}
