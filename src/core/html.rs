// src/core/html.rs
// Small helpers over `scraper` element trees.

use scraper::ElementRef;

/// All descendant text of `el`, concatenated in document order.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Descendant text with surrounding whitespace trimmed; inner layout kept.
pub fn trimmed_text(el: ElementRef<'_>) -> String {
    text_of(el).trim().to_string()
}
