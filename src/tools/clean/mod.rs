mod tests;
mod utils;

use once_cell::sync::Lazy;
use regex::Regex;
use utils::*;

static SERVICE_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^Service\s*\d*:?\s*").expect("valid regex"));
static SERVICE_NUMBERING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[•\-*\d.\s]+").expect("valid regex"));
static WEEKDAY_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Mon\s*[–-]\s*Fri.*?(?:AM|PM)").expect("valid regex"));
static CLOCK_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\d{1,2}:\d{2}\s*(?:AM|PM)").expect("valid regex"));

static TITLE_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*[-|–]\s*.+$").expect("valid regex"));
static TITLE_HOME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s*Home\s*$").expect("valid regex"));

static LOGO_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\blogo\b").expect("valid regex"));

/// Normalize one candidate string.
///
/// Steps, in order:
/// 1. Remove zero-width characters
/// 2. Remove control characters (newlines/tabs survive until step 4)
/// 3. Unicode NFC
/// 4. Collapse whitespace runs and trim
/// 5. Strip leading bullets and `N.` / `N)` list markers
///
/// Idempotent: `normalize(normalize(s)) == normalize(s)`.
///
/// # Examples
/// ```
/// use sitefacts::tools::clean::normalize;
///
/// assert_eq!(normalize("  •  Water\u{200B} Heater\n  Repair "), "Water Heater Repair");
/// ```
pub fn normalize(text: &str) -> String {
    let result = remove_zero_width_chars(text);
    let result = remove_control_chars(&result);
    let result = normalize_unicode(&result);
    let result = normalize_whitespace(&result);
    strip_list_markers(&result)
}

/// Shape a heading or list item into a service name: drop `Service 1:`
/// prefixes, leading numbering, weekday spans and clock times.
pub fn clean_service(text: &str) -> String {
    let result = normalize_whitespace(text);
    let result = SERVICE_PREFIX.replace(&result, "");
    let result = SERVICE_NUMBERING.replace(&result, "");
    let result = WEEKDAY_SPAN.replace_all(&result, "");
    let result = CLOCK_TIME.replace_all(&result, "");
    normalize_whitespace(&result)
}

/// Cut a page title down to the brand: everything from the first
/// separator on goes, as does a trailing "Home".
pub fn clean_title(text: &str) -> String {
    let result = TITLE_SEPARATOR.replace(text, "");
    let result = TITLE_HOME.replace(&result, "");
    normalize_whitespace(&result)
}

/// Remove standalone "logo" words from image alt text.
pub fn strip_logo_token(text: &str) -> String {
    normalize_whitespace(&LOGO_TOKEN.replace_all(text, " "))
}

/// Uppercase the first letter of every alphabetic run, lowercase the rest.
/// `bluesky-roofing` becomes `Bluesky-Roofing`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_start = false;
        } else {
            out.push(c);
            at_start = true;
        }
    }
    out
}

/// Render a ten-digit North American number as `(AAA) EEE-LLLL`.
/// Any punctuation in the input is ignored; other digit counts yield `None`.
pub fn canonical_phone(text: &str) -> Option<String> {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != 10 {
        return None;
    }
    Some(format!(
        "({}) {}-{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..10]
    ))
}

/// Absolute `https://` form of a scheme-less or `http://` link.
pub fn force_https(link: &str) -> String {
    let link = link.trim();
    if let Some(rest) = link.strip_prefix("http://") {
        format!("https://{rest}")
    } else if link.starts_with("https://") {
        link.to_string()
    } else {
        format!("https://{}", link.trim_start_matches('/'))
    }
}
