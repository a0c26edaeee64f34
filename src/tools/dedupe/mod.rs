//! Near-duplicate suppression.
//!
//! Two strategies: token-set Jaccard similarity for long free text
//! (testimonials) and case-insensitive containment for short names
//! (services).


use std::collections::HashSet;

/// Similarity above which a candidate counts as a repeat of a kept one.
pub const SIMILARITY_THRESHOLD: f64 = 0.7;

/// Lower-cased whitespace tokens with punctuation trimmed from both ends.
/// Tokens that are pure punctuation disappear.
pub fn tokens(text: &str) -> HashSet<String> {
    text.split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
        .filter(|word| !word.is_empty())
        .collect()
}

/// |A ∩ B| / |A ∪ B|; zero when both sides are empty.
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

/// Keep items in first-seen order, dropping exact repeats and any item whose
/// similarity to an already-kept item exceeds `threshold`.
///
/// # Examples
/// ```
/// use sitefacts::tools::dedupe::{dedupe, SIMILARITY_THRESHOLD};
///
/// let kept = dedupe(
///     vec![
///         "Great service, very professional team!".to_string(),
///         "Great service! Very professional team.".to_string(),
///     ],
///     SIMILARITY_THRESHOLD,
/// );
/// assert_eq!(kept, vec!["Great service, very professional team!"]);
/// ```
pub fn dedupe(items: Vec<String>, threshold: f64) -> Vec<String> {
    let mut kept: Vec<(String, HashSet<String>)> = Vec::new();
    for item in crate::dedupe!(items) {
        let toks = tokens(&item);
        if kept.iter().any(|(_, seen)| jaccard(&toks, seen) > threshold) {
            continue;
        }
        kept.push((item, toks));
    }
    kept.into_iter().map(|(item, _)| item).collect()
}

/// Drop any item that contains, or is contained in, an already-kept item
/// (case-insensitive). The first one encountered survives.
pub fn suppress_contained(items: Vec<String>) -> Vec<String> {
    let mut kept: Vec<(String, String)> = Vec::new();
    for item in items {
        let lower = item.to_lowercase();
        let overlaps = kept
            .iter()
            .any(|(_, seen)| seen.contains(&lower) || lower.contains(seen.as_str()));
        if !overlaps {
            kept.push((item, lower));
        }
    }
    kept.into_iter().map(|(item, _)| item).collect()
}
