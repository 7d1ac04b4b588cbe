// src/verify.rs
//! Completeness check of downloaded book artifacts against the manifest.
//!
//! Books are checked in manifest order, so two runs over the same data report
//! issues in the same order. Data gaps become [`Issue`]s; only unreadable or
//! undecodable files are errors.
//!
//! Artifacts are read through a narrow view that only needs `chapters`, each
//! with its `chapter` number and `verses`. Header fields and the shape of
//! individual verses are not checked here.

use std::{fmt, ops::Range, path::Path};

use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;
use crate::file;
use crate::manifest::Manifest;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Issue {
    FileNotFound {
        book: String,
        expected: u32,
    },
    ChapterCountMismatch {
        book: String,
        expected: u32,
        found: u64,
        /// Negative when the artifact has more chapters than expected.
        missing: i64,
    },
    EmptyChapterVerses {
        book: String,
        chapter: u64,
    },
}

impl Issue {
    pub fn book(&self) -> &str {
        match self {
            Issue::FileNotFound { book, .. }
            | Issue::ChapterCountMismatch { book, .. }
            | Issue::EmptyChapterVerses { book, .. } => book,
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            Issue::FileNotFound { .. } => "file not found",
            Issue::ChapterCountMismatch { .. } => "chapter count mismatch",
            Issue::EmptyChapterVerses { .. } => "no verses found",
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::FileNotFound { book, expected } => {
                write!(f, "{book}: file not found (expected {expected} chapters)")
            }
            Issue::ChapterCountMismatch { book, expected, found, missing } => {
                write!(f, "{book}: expected {expected} chapters, found {found} (missing {missing})")
            }
            Issue::EmptyChapterVerses { book, chapter } => {
                write!(f, "{book}: chapter {chapter} has no verses")
            }
        }
    }
}

/// Outcome for one manifest book, in manifest order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookOutcome {
    pub name_en: String,
    pub name_ro: String,
    /// Chapters in the artifact; `None` when no artifact was found.
    pub found: Option<u64>,
    issues: Range<usize>,
}

impl BookOutcome {
    pub fn passed(&self) -> bool {
        self.issues.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VerificationReport {
    pub overall_pass: bool,
    pub total_expected: u64,
    pub total_found: u64,
    /// In discovery order.
    pub issues: Vec<Issue>,
    pub books: Vec<BookOutcome>,
}

impl VerificationReport {
    pub fn issues_of(&self, book: &BookOutcome) -> &[Issue] {
        &self.issues[book.issues.clone()]
    }

    /// Books whose artifact passed every check.
    pub fn verified(&self) -> impl Iterator<Item = &BookOutcome> {
        self.books.iter().filter(|b| b.passed())
    }
}

#[derive(Deserialize)]
struct ArtifactView {
    chapters: Vec<ChapterView>,
}

#[derive(Deserialize)]
struct ChapterView {
    #[serde(default)]
    chapter: Option<u64>,
    #[serde(default)]
    verses: Value,
}

impl ChapterView {
    fn has_verses(&self) -> bool {
        match &self.verses {
            Value::Null => false,
            Value::Array(v) => !v.is_empty(),
            Value::Object(m) => !m.is_empty(),
            Value::String(s) => !s.is_empty(),
            Value::Bool(b) => *b,
            Value::Number(_) => true,
        }
    }
}

pub fn verify(manifest: &Manifest, dir: &Path) -> Result<VerificationReport> {
    let mut report = VerificationReport::default();

    for entry in manifest.books() {
        let book = entry.book;
        let expected = book.chapters;
        report.total_expected += u64::from(expected);
        let first_issue = report.issues.len();

        let found = match file::find_artifact(dir, &book.name_ro)? {
            None => {
                tracing::debug!(book = %book.name_en, "artifact missing");
                report.issues.push(Issue::FileNotFound { book: book.name_en.clone(), expected });
                None
            }
            Some(path) => {
                let view: ArtifactView = file::read_json(&path)?;
                Some(check_chapters(&mut report.issues, &book.name_en, expected, &view))
            }
        };
        report.total_found += found.unwrap_or(0);

        report.books.push(BookOutcome {
            name_en: book.name_en.clone(),
            name_ro: book.name_ro.clone(),
            found,
            issues: first_issue..report.issues.len(),
        });
    }

    report.overall_pass = report.issues.is_empty();
    Ok(report)
}

/// Count check, then per-chapter verse checks when the count matches.
/// Returns the number of chapters found.
fn check_chapters(issues: &mut Vec<Issue>, book: &str, expected: u32, view: &ArtifactView) -> u64 {
    let found = view.chapters.len() as u64;

    if found != u64::from(expected) {
        issues.push(Issue::ChapterCountMismatch {
            book: book.to_string(),
            expected,
            found,
            missing: i64::from(expected) - found as i64,
        });
        return found;
    }

    for (i, chapter) in view.chapters.iter().enumerate() {
        if !chapter.has_verses() {
            issues.push(Issue::EmptyChapterVerses {
                book: book.to_string(),
                // unnumbered chapters are named by position
                chapter: chapter.chapter.unwrap_or(i as u64 + 1),
            });
        }
    }
    found
}
