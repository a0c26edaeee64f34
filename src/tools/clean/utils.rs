/// Private helpers for text normalization
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Bullet glyphs, dashes, asterisks and `1.` / `2)` list numbering.
static LIST_MARKER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[•·▪►◦‣*\-–—]+\s*|\d{1,2}[.)]\s+)+").expect("valid regex")
});

pub fn normalize_unicode(text: &str) -> String {
    text.nfc().collect::<String>()
}

/// Remove zero-width space, joiners, word joiner and the BOM.
pub fn remove_zero_width_chars(text: &str) -> String {
    text.chars()
        .filter(|c| {
            !matches!(
                *c,
                '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{2060}' | '\u{FEFF}'
            )
        })
        .collect()
}

/// Control characters go; line breaks and tabs stay for the whitespace pass.
pub fn remove_control_chars(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() || matches!(*c, '\n' | '\r' | '\t'))
        .collect()
}

pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_REGEX.replace_all(text, " ").trim().to_string()
}

pub fn strip_list_markers(text: &str) -> String {
    LIST_MARKER_REGEX.replace(text, "").trim().to_string()
}
