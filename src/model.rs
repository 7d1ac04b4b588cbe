// src/model.rs
//! Records shared by the downloader and the verifier.
//!
//! Field names on the wire follow the artifact format:
//! book `{id, book_number, name_en, name_ro, chapter_count, url, chapters}`,
//! chapter `{chapter, verses, url}`, verse `{verse, text}`.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::manifest::BookDescriptor;

/// Opaque book identifier, kept as it appears in the manifest.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BookId {
    Number(u64),
    Text(String),
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookId::Number(n) => write!(f, "{n}"),
            BookId::Text(s) => f.write_str(s),
        }
    }
}

/// Verse number as printed by the source. Non-numeric markers are kept verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VerseNumber {
    Number(u64),
    Raw(String),
}

impl fmt::Display for VerseNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerseNumber::Number(n) => write!(f, "{n}"),
            VerseNumber::Raw(s) => f.write_str(s),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    #[serde(rename = "verse")]
    pub number: VerseNumber,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    #[serde(rename = "chapter")]
    pub number: u32,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub verses: Vec<Verse>,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub id: BookId,
    pub book_number: u32,
    pub name_en: String,
    pub name_ro: String,
    pub chapter_count: u32,
    pub url: String,
    pub chapters: Vec<Chapter>,
}

impl BookRecord {
    /// Empty record for `book`; chapters are appended as they arrive.
    pub fn new(book_number: u32, book: &BookDescriptor) -> Self {
        Self {
            id: book.id.clone(),
            book_number,
            name_en: book.name_en.clone(),
            name_ro: book.name_ro.clone(),
            chapter_count: book.chapters,
            url: book.url.clone(),
            chapters: Vec::with_capacity(book.chapters as usize),
        }
    }
}

/// Run-wide counters, threaded through the download loop.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadStats {
    pub total_books: u32,
    pub total_chapters: u32,
    pub successful_chapters: u32,
    pub failed_chapters: u32,
}

impl DownloadStats {
    pub fn add_book(&mut self, chapters: u32) {
        self.total_books += 1;
        self.total_chapters += chapters;
    }

    pub fn record(&mut self, ok: bool) {
        if ok {
            self.successful_chapters += 1;
        } else {
            self.failed_chapters += 1;
        }
    }

    /// Percentage of successful chapters; `None` when nothing was attempted.
    pub fn success_rate(&self) -> Option<f64> {
        (self.total_chapters > 0)
            .then(|| f64::from(self.successful_chapters) / f64::from(self.total_chapters) * 100.0)
    }
}

// Older or hand-edited artifacts may carry `"verses": null`.
fn null_as_empty<'de, D>(d: D) -> Result<Vec<Verse>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Verse>>::deserialize(d)?.unwrap_or_default())
}
