use crate::tools::patterns::PatternRule;
use crate::tools::types::Candidate;

/// Every match of every pattern in `rule`, pattern by pattern.
/// A pattern with a capture group contributes group 1, otherwise the whole match.
pub(super) fn regex_candidates<'a>(rule: &PatternRule, text: &str) -> Vec<Candidate<'a>> {
    let mut found = Vec::new();
    for re in &rule.patterns {
        for caps in re.captures_iter(text) {
            if let Some(m) = caps.get(1).or_else(|| caps.get(0)) {
                found.push(Candidate::new(rule.id, m.as_str()));
            }
        }
    }
    found
}
