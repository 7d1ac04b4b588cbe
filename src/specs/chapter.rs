// src/specs/chapter.rs
//! Scraping rules for a chapter page (`carte.php?id=<book>&cap=<chapter>`).
//!
//! Page shape:
//! ```text
//! <tr id="verset1">
//!   <td><span class="nr">1.</span></td>
//!   <td>La început a făcut Dumnezeu cerul și pământul.</td>
//! </tr>
//! ```
//! - Verse rows are `tr` elements whose `id` starts with `verset`.
//! - The verse number lives in `span.nr`; the text in the row's second `td`.
//!
//! Rows missing either piece are skipped, not fatal. A page with no verse rows
//! and a page whose rows all got skipped are reported as different failures.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::config::consts::{VERSE_NUMBER_CLASS, VERSE_ROW_PREFIX};
use crate::core::{html, sanitize};
use crate::error::FetchError;
use crate::model::Verse;

static VERSE_ROW: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(&format!(r#"tr[id^="{VERSE_ROW_PREFIX}"]"#)).unwrap()
});
static VERSE_NUMBER: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(&format!("span.{VERSE_NUMBER_CLASS}")).unwrap()
});
static CELL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").unwrap());

/// Extract the ordered verse list from a chapter page.
pub fn parse_chapter(doc: &str) -> Result<Vec<Verse>, FetchError> {
    let document = Html::parse_document(doc);

    let mut rows = document.select(&VERSE_ROW).peekable();
    if rows.peek().is_none() {
        return Err(FetchError::ParseEmpty);
    }

    let mut verses = Vec::new();
    for row in rows {
        let Some(marker) = row.select(&VERSE_NUMBER).next() else {
            tracing::debug!(row = row.value().id().unwrap_or(""), "verse row without number marker");
            continue;
        };
        let number = sanitize::verse_number(&html::text_of(marker));

        let Some(cell) = row.select(&CELL).nth(1) else {
            tracing::debug!(row = row.value().id().unwrap_or(""), "verse row without text cell");
            continue;
        };

        verses.push(Verse { number, text: html::trimmed_text(cell) });
    }

    if verses.is_empty() {
        return Err(FetchError::ExtractionEmpty);
    }
    Ok(verses)
}
