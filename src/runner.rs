// src/runner.rs
use std::{path::PathBuf, thread};

use crate::{
    config::options::DownloadOptions,
    core::net::Fetch,
    error::Result,
    file,
    manifest::{Manifest, Testament},
    model::{BookRecord, DownloadStats},
    progress::Progress,
    scrape::fetch_chapter,
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub stats: DownloadStats,
    pub files_written: Vec<PathBuf>,
}

/// Download every selected book, one chapter at a time.
///
/// Failed chapters are counted and skipped; the book file is written with
/// whatever succeeded. Only local I/O problems abort the run.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn download_all(
    manifest: &Manifest,
    fetcher: &dyn Fetch,
    opts: &DownloadOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let selected: Vec<_> = manifest.books().filter(|b| opts.books.includes(b.number)).collect();

    if let Some(p) = progress.as_deref_mut() {
        let chapters: u64 = selected.iter().map(|b| u64::from(b.book.chapters)).sum();
        p.begin(selected.len(), chapters);
    }

    file::ensure_directory(&opts.out_dir)?;

    let mut stats = DownloadStats::default();
    let mut written = Vec::with_capacity(selected.len());
    let mut current: Option<Testament> = None;

    for entry in selected {
        let book = entry.book;

        if current != Some(entry.testament) {
            current = Some(entry.testament);
            if let Some(p) = progress.as_deref_mut() {
                p.testament(entry.testament);
            }
        }

        stats.add_book(book.chapters);
        if let Some(p) = progress.as_deref_mut() {
            p.book_started(entry.number, book);
        }
        tracing::info!(book = entry.number, name = %book.name_en, chapters = book.chapters, "downloading book");

        let mut record = BookRecord::new(entry.number, book);

        for chapter in 1..=book.chapters {
            if let Some(p) = progress.as_deref_mut() {
                p.chapter_started(chapter, book.chapters);
            }

            match fetch_chapter(fetcher, &opts.base_url, &book.id, chapter) {
                Ok(ch) => {
                    record.chapters.push(ch);
                    stats.record(true);
                    if let Some(p) = progress.as_deref_mut() {
                        p.chapter_done(chapter);
                    }
                }
                Err(e) => {
                    stats.record(false);
                    if let Some(p) = progress.as_deref_mut() {
                        p.chapter_failed(chapter, &e);
                    }
                }
            }

            if !opts.pause.is_zero() {
                thread::sleep(opts.pause); // be polite
            }
        }

        let path = file::write_book(&opts.out_dir, &record)?;
        if let Some(p) = progress.as_deref_mut() {
            p.book_saved(&path);
        }
        written.push(path);
    }

    file::write_stats(&opts.stats_file, &stats)?;

    if let Some(p) = progress.as_deref_mut() {
        p.finish(&stats);
    }

    Ok(RunSummary { stats, files_written: written })
}
