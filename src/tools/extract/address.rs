use super::utils::regex_candidates;
use super::{Extractor, PageContext};
use crate::document::element_text;
use crate::error::Result;
use crate::tools::patterns::{FactKind, RuleId};
use crate::tools::types::Candidate;

/// Street addresses, most specific tier first:
/// contact/address/location blocks, then `itemprop` microdata, then the
/// whole page text.
pub struct AddressExtractor;

impl Extractor for AddressExtractor {
    fn kind(&self) -> FactKind {
        FactKind::Address
    }

    fn candidates<'a>(&self, ctx: &PageContext<'a>) -> Result<Vec<Candidate<'a>>> {
        let mut found = Vec::new();

        let contact = ctx.patterns.rule(RuleId::AddressContact)?;
        for block in contact.elements(ctx.doc) {
            let text = element_text(&block);
            for re in &contact.patterns {
                for m in re.find_iter(&text) {
                    found.push(Candidate::from_element(contact.id, m.as_str(), block));
                }
            }
        }

        let microdata = ctx.patterns.rule(RuleId::AddressMicrodata)?;
        for el in microdata.elements(ctx.doc) {
            found.push(Candidate::from_element(microdata.id, element_text(&el), el));
        }

        let page = ctx.patterns.rule(RuleId::AddressPage)?;
        found.extend(regex_candidates(page, ctx.doc.text()));
        Ok(found)
    }
}
