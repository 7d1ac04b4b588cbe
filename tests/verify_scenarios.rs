// tests/verify_scenarios.rs
//
// Verifier behaviour over artifact directories built in temp dirs.
//
mod common;

use std::fs;
use std::path::Path;

use biblia_scrape::error::Error;
use biblia_scrape::file;
use biblia_scrape::manifest::BookDescriptor;
use biblia_scrape::model::{BookRecord, Chapter, Verse, VerseNumber};
use biblia_scrape::verify::{Issue, verify};

use common::*;

fn chapter(n: u32, verses: usize) -> Chapter {
    Chapter {
        number: n,
        verses: (1..=verses)
            .map(|i| Verse { number: VerseNumber::Number(i as u64), text: format!("v{i}") })
            .collect(),
        url: url(1, n),
    }
}

fn write(dir: &Path, number: u32, book: &BookDescriptor, chapters: Vec<Chapter>) {
    let mut record = BookRecord::new(number, book);
    record.chapters = chapters;
    file::write_book(dir, &record).unwrap();
}

#[test]
fn missing_file_is_reported_once() {
    let dir = tempfile::tempdir().unwrap();
    let x = descriptor(1, "Genesis", "Facerea", 3);
    let m = manifest(vec![x], vec![]);

    let report = verify(&m, dir.path()).unwrap();

    assert!(!report.overall_pass);
    assert_eq!(
        report.issues,
        vec![Issue::FileNotFound { book: "Genesis".into(), expected: 3 }]
    );
    assert_eq!(report.issues[0].reason(), "file not found");
    assert_eq!(report.total_expected, 3);
    assert_eq!(report.total_found, 0);
}

#[test]
fn count_mismatch_skips_verse_checks() {
    let dir = tempfile::tempdir().unwrap();
    let x = descriptor(1, "Genesis", "Facerea", 3);
    // chapter 2 is empty too, but counts differ so it must not be reported
    write(dir.path(), 1, &x, vec![chapter(1, 4), chapter(2, 0)]);
    let m = manifest(vec![x], vec![]);

    let report = verify(&m, dir.path()).unwrap();

    assert!(!report.overall_pass);
    assert_eq!(
        report.issues,
        vec![Issue::ChapterCountMismatch { book: "Genesis".into(), expected: 3, found: 2, missing: 1 }]
    );
    assert_eq!(report.total_found, 2);
    assert_eq!(report.verified().count(), 0);
}

#[test]
fn empty_chapter_is_reported_alone() {
    let dir = tempfile::tempdir().unwrap();
    let x = descriptor(1, "Ruth", "Rut", 2);
    write(dir.path(), 1, &x, vec![chapter(1, 3), chapter(2, 0)]);
    let m = manifest(vec![x], vec![]);

    let report = verify(&m, dir.path()).unwrap();

    assert!(!report.overall_pass);
    assert_eq!(report.issues, vec![Issue::EmptyChapterVerses { book: "Ruth".into(), chapter: 2 }]);
    assert_eq!(report.issues[0].reason(), "no verses found");
}

#[test]
fn every_empty_chapter_is_recorded() {
    let dir = tempfile::tempdir().unwrap();
    let x = descriptor(1, "Ruth", "Rut", 3);
    write(dir.path(), 1, &x, vec![chapter(1, 0), chapter(2, 1), chapter(3, 0)]);
    let m = manifest(vec![x], vec![]);

    let report = verify(&m, dir.path()).unwrap();

    let chapters: Vec<u64> = report
        .issues
        .iter()
        .map(|i| match i {
            Issue::EmptyChapterVerses { chapter, .. } => *chapter,
            other => panic!("unexpected issue {other:?}"),
        })
        .collect();
    assert_eq!(chapters, [1, 3]);
}

#[test]
fn complete_corpus_passes() {
    let dir = tempfile::tempdir().unwrap();
    let genesis = descriptor(1, "Genesis", "Facerea", 2);
    let mat = descriptor(50, "Matthew", "Matei", 1);
    write(dir.path(), 1, &genesis, vec![chapter(1, 2), chapter(2, 5)]);
    write(dir.path(), 2, &mat, vec![chapter(1, 1)]);
    let m = manifest(vec![genesis], vec![mat]);

    let report = verify(&m, dir.path()).unwrap();

    assert!(report.overall_pass);
    assert!(report.issues.is_empty());
    assert_eq!(report.total_expected, 3);
    assert_eq!(report.total_found, report.total_expected);
    let names: Vec<&str> = report.verified().map(|b| b.name_ro.as_str()).collect();
    assert_eq!(names, ["Facerea", "Matei"]);
    assert_eq!(report.books[0].found, Some(2));
}

#[test]
fn prefix_names_do_not_collide() {
    let dir = tempfile::tempdir().unwrap();
    let john = descriptor(43, "John", "Ioan", 1);
    let first_john = descriptor(62, "1 John", "I Ioan", 2);
    // only "I Ioan" exists on disk
    write(dir.path(), 2, &first_john, vec![chapter(1, 1), chapter(2, 1)]);
    let m = manifest(vec![], vec![john, first_john]);

    let report = verify(&m, dir.path()).unwrap();

    assert_eq!(report.issues, vec![Issue::FileNotFound { book: "John".into(), expected: 1 }]);
    let verified: Vec<&str> = report.verified().map(|b| b.name_en.as_str()).collect();
    assert_eq!(verified, ["1 John"]);
}

#[test]
fn issues_follow_manifest_order() {
    let dir = tempfile::tempdir().unwrap();
    let a = descriptor(1, "Genesis", "Facerea", 1);
    let b = descriptor(2, "Exodus", "Iesirea", 2);
    let c = descriptor(3, "Matthew", "Matei", 1);
    write(dir.path(), 2, &b, vec![chapter(1, 1)]);
    write(dir.path(), 3, &c, vec![chapter(1, 0)]);
    let m = manifest(vec![a, b], vec![c]);

    let report = verify(&m, dir.path()).unwrap();

    let books: Vec<&str> = report.issues.iter().map(|i| i.book()).collect();
    assert_eq!(books, ["Genesis", "Exodus", "Matthew"]);

    // per-book outcomes line up with their own issues
    let outcomes: Vec<(&str, Option<u64>, usize)> = report
        .books
        .iter()
        .map(|b| (b.name_en.as_str(), b.found, report.issues_of(b).len()))
        .collect();
    assert_eq!(outcomes, [("Genesis", None, 1), ("Exodus", Some(1), 1), ("Matthew", Some(1), 1)]);
    assert!(matches!(report.issues_of(&report.books[2])[0], Issue::EmptyChapterVerses { chapter: 1, .. }));
    assert_eq!(report.total_expected, 4);
    assert_eq!(report.total_found, 2);
}

#[test]
fn missing_directory_reports_every_book() {
    let dir = tempfile::tempdir().unwrap();
    let m = manifest(
        vec![descriptor(1, "Genesis", "Facerea", 50)],
        vec![descriptor(2, "Matthew", "Matei", 28)],
    );

    let report = verify(&m, &dir.path().join("nope")).unwrap();

    assert_eq!(report.issues.len(), 2);
    assert!(report.issues.iter().all(|i| matches!(i, Issue::FileNotFound { .. })));
}

#[test]
fn undecodable_artifact_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("01_Facerea.json"), "{ not json").unwrap();
    let m = manifest(vec![descriptor(1, "Genesis", "Facerea", 1)], vec![]);

    let err = verify(&m, dir.path()).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

#[test]
fn minimal_artifact_is_judged_on_chapters_only() {
    let dir = tempfile::tempdir().unwrap();
    // no header fields, a verse number past u32, one unnumbered chapter
    fs::write(
        dir.path().join("01_Facerea.json"),
        r#"{"chapters":[
            {"chapter":1,"verses":[{"verse":4294967296,"text":"a"}]},
            {"verses":[{"verse":"x"}]}
        ]}"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("02_Iesirea.json"),
        r#"{"chapters":[{"chapter":1,"verses":[]},{"verses":null}]}"#,
    )
    .unwrap();
    let m = manifest(
        vec![descriptor(1, "Genesis", "Facerea", 2), descriptor(2, "Exodus", "Iesirea", 2)],
        vec![],
    );

    let report = verify(&m, dir.path()).unwrap();

    assert_eq!(
        report.issues,
        vec![
            Issue::EmptyChapterVerses { book: "Exodus".into(), chapter: 1 },
            Issue::EmptyChapterVerses { book: "Exodus".into(), chapter: 2 },
        ]
    );
    assert!(report.books[0].passed());
    assert_eq!(report.total_found, 4);
}

#[test]
fn artifact_without_chapters_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("01_Facerea.json"), r#"{"name_ro":"Facerea"}"#).unwrap();
    let m = manifest(vec![descriptor(1, "Genesis", "Facerea", 1)], vec![]);

    assert!(matches!(verify(&m, dir.path()).unwrap_err(), Error::Decode { .. }));
}
