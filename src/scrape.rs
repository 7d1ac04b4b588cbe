// src/scrape.rs
use crate::{
    config::consts::CHAPTER_PATH,
    core::net::Fetch,
    error::FetchError,
    model::{BookId, Chapter},
    specs::chapter::parse_chapter,
};

/// Request target for one chapter.
pub fn chapter_url(base_url: &str, book_id: &BookId, chapter: u32) -> String {
    format!(
        "{}{CHAPTER_PATH}?id={book_id}&cap={chapter}",
        base_url.trim_end_matches('/')
    )
}

/// Fetch and parse a single chapter.
///
/// Every failure comes back as a [`FetchError`] and is logged here with its
/// kind, so callers only need to branch on success.
pub fn fetch_chapter(
    fetcher: &dyn Fetch,
    base_url: &str,
    book_id: &BookId,
    chapter: u32,
) -> Result<Chapter, FetchError> {
    let url = chapter_url(base_url, book_id, chapter);

    let result = fetcher
        .get(&url)
        .map_err(|e| FetchError::Transport(e.to_string()))
        .and_then(|doc| parse_chapter(&doc));

    match result {
        Ok(verses) => {
            tracing::debug!(book = %book_id, chapter, verses = verses.len(), "chapter parsed");
            Ok(Chapter { number: chapter, verses, url })
        }
        Err(e) => {
            tracing::warn!(book = %book_id, chapter, %url, kind = e.kind(), "{e}");
            Err(e)
        }
    }
}
