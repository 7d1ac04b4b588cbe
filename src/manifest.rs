// src/manifest.rs
//! Book manifest: the externally supplied list of books and their expected
//! chapter counts, split into the two testaments.
//!
//! Book numbers are 1-based positions across the Old Testament followed by
//! the New Testament. Both the downloader and the verifier derive artifact
//! names from them, so iteration order here is load-bearing.

use std::{fmt, fs, path::Path};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::model::BookId;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct BookDescriptor {
    pub id: BookId,
    pub name_en: String,
    pub name_ro: String,
    /// Expected number of chapters.
    pub chapters: u32,
    pub url: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Testament {
    Old,
    New,
}

impl Testament {
    pub const ALL: [Testament; 2] = [Testament::Old, Testament::New];

    /// Key used in the manifest JSON.
    pub fn key(self) -> &'static str {
        match self {
            Testament::Old => "old_testament",
            Testament::New => "new_testament",
        }
    }
}

impl fmt::Display for Testament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Testament::Old => "OLD TESTAMENT",
            Testament::New => "NEW TESTAMENT",
        })
    }
}

/// A manifest entry together with its position in the whole canon.
#[derive(Clone, Copy, Debug)]
pub struct NumberedBook<'a> {
    pub number: u32,
    pub testament: Testament,
    pub book: &'a BookDescriptor,
}

#[derive(Deserialize)]
struct RawManifest {
    old_testament: Vec<BookDescriptor>,
    new_testament: Vec<BookDescriptor>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "RawManifest")]
pub struct Manifest {
    testaments: [(Testament, Vec<BookDescriptor>); 2],
}

impl From<RawManifest> for Manifest {
    fn from(raw: RawManifest) -> Self {
        Manifest::new(raw.old_testament, raw.new_testament)
    }
}

impl Manifest {
    pub fn new(old: Vec<BookDescriptor>, new: Vec<BookDescriptor>) -> Self {
        Self { testaments: [(Testament::Old, old), (Testament::New, new)] }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            Error::Manifest(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let manifest: Manifest = serde_json::from_str(text)
            .map_err(|e| Error::Manifest(e.to_string()))?;
        manifest.validate()?;
        Ok(manifest)
    }

    fn validate(&self) -> Result<()> {
        for entry in self.books() {
            if entry.book.chapters == 0 {
                return Err(Error::Manifest(format!(
                    "{} ({}) declares zero chapters",
                    entry.book.name_en,
                    entry.testament.key()
                )));
            }
        }
        Ok(())
    }

    pub fn testaments(&self) -> impl Iterator<Item = (Testament, &[BookDescriptor])> {
        self.testaments.iter().map(|(t, books)| (*t, books.as_slice()))
    }

    /// Every book in canonical order, numbered from 1.
    pub fn books(&self) -> impl Iterator<Item = NumberedBook<'_>> {
        self.testaments()
            .flat_map(|(testament, books)| books.iter().map(move |book| (testament, book)))
            .zip(1u32..)
            .map(|((testament, book), number)| NumberedBook { number, testament, book })
    }

    pub fn book_count(&self) -> usize {
        self.testaments.iter().map(|(_, b)| b.len()).sum()
    }

    pub fn chapter_count(&self) -> u64 {
        self.books().map(|b| u64::from(b.book.chapters)).sum()
    }
}
