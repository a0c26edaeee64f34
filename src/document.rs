//! Parsed page handed to the extractors.

use crate::selectors::{BLOCK_TAGS, JUNK_TAGS, LINK_SELECTOR};
use regex::Regex;
use scraper::html::Select;
use scraper::{ElementRef, Html, Selector};

/// One parsed HTML page: DOM tree, raw HTML and flattened text.
///
/// Extraction only reads a `Document`. The tree is not `Send`, so each page
/// is parsed on the thread that extracts it.
pub struct Document {
    html: String,
    tree: Html,
    text: String,
}

impl Document {
    /// Parse a full HTML document. Malformed markup never fails; html5ever
    /// recovers the way browsers do.
    pub fn parse(html: impl Into<String>) -> Self {
        let html = html.into();
        let tree = Html::parse_document(&html);
        let text = flatten_text(&tree);
        Self { html, tree, text }
    }

    /// Raw HTML as fetched.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Text of the whole page, minus script/style bodies, one line break
    /// around each block element.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Elements matching a CSS selector, in document order.
    pub fn select<'a, 'b>(&'a self, selector: &'b Selector) -> Select<'a, 'b> {
        self.tree.select(selector)
    }

    /// Elements whose `attr` matches `pattern`, optionally limited to `tags`.
    pub fn select_by_attr<'a>(
        &'a self,
        tags: &[String],
        attr: &str,
        pattern: &Regex,
    ) -> Vec<ElementRef<'a>> {
        self.tree
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|el| tags.is_empty() || tags.iter().any(|t| t == el.value().name()))
            .filter(|el| {
                el.value()
                    .attr(attr)
                    .map(|value| pattern.is_match(value))
                    .unwrap_or(false)
            })
            .collect()
    }

    /// All anchor `href` values.
    pub fn hrefs(&self) -> Vec<&str> {
        self.tree
            .select(&LINK_SELECTOR)
            .filter_map(|a| a.value().attr("href"))
            .collect()
    }
}

/// Trimmed text content of an element.
pub fn element_text(el: &ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

fn flatten_text(tree: &Html) -> String {
    let mut text = String::new();
    flatten_into(tree.root_element(), &mut text);
    text
}

/// Inline runs stay glued (`<b>425</b>-555-0100`); block boundaries become
/// newlines so patterns never match across two blocks.
fn flatten_into(el: ElementRef<'_>, out: &mut String) {
    for child in el.children() {
        if let Some(chunk) = child.value().as_text() {
            out.push_str(chunk);
        } else if let Some(child) = ElementRef::wrap(child) {
            let name = child.value().name();
            if JUNK_TAGS.contains(&name) {
                continue;
            }
            let block = BLOCK_TAGS.contains(&name);
            if block {
                out.push('\n');
            }
            flatten_into(child, out);
            if block {
                out.push('\n');
            }
        }
    }
}
