//! Shared Selectors

use once_cell::sync::Lazy;
use scraper::Selector;

/// Selector for anchor elements with hrefs.
pub static LINK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("valid link selector"));

/// HTML tags whose text never reaches the flattened page text.
pub const JUNK_TAGS: &[&str] = &["script", "style", "noscript", "template"];

/// Elements whose text stands apart from its neighbours.
pub const BLOCK_TAGS: &[&str] = &[
    "title", "body", "p", "div", "section", "article", "header", "footer", "nav", "aside",
    "main", "ul", "ol", "li", "dl", "dt", "dd", "h1", "h2", "h3", "h4", "h5", "h6", "table",
    "tr", "td", "th", "blockquote", "pre", "address", "form", "fieldset", "figure",
    "figcaption", "br", "hr",
];
