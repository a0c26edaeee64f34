use super::{Extractor, PageContext};
use crate::error::Result;
use crate::tools::clean::force_https;
use crate::tools::patterns::{FactKind, RuleId};
use crate::tools::types::Candidate;
use crate::types::Platform;

/// Profile links for each platform, searched in the raw HTML followed by
/// every anchor `href`. Only the first match per platform is offered.
pub struct SocialExtractor;

impl Extractor for SocialExtractor {
    fn kind(&self) -> FactKind {
        FactKind::SocialLink
    }

    fn candidates<'a>(&self, ctx: &PageContext<'a>) -> Result<Vec<Candidate<'a>>> {
        let haystack = format!("{} {}", ctx.doc.html(), ctx.doc.hrefs().join(" "));
        let mut found = Vec::new();
        for platform in Platform::ALL {
            let rule = ctx.patterns.rule(RuleId::Social(platform))?;
            let first = rule.patterns.iter().find_map(|re| re.find(&haystack));
            if let Some(m) = first {
                found.push(Candidate::new(rule.id, force_https(m.as_str())));
            }
        }
        Ok(found)
    }
}
