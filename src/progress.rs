// src/progress.rs
use std::path::Path;

use crate::error::FetchError;
use crate::manifest::{BookDescriptor, Testament};
use crate::model::DownloadStats;

/// Progress hooks for a download run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called once with the number of selected books and their chapter total.
    fn begin(&mut self, _books: usize, _chapters: u64) {}

    /// Entering a testament's books.
    fn testament(&mut self, _testament: Testament) {}

    fn book_started(&mut self, _number: u32, _book: &BookDescriptor) {}

    fn chapter_started(&mut self, _chapter: u32, _of: u32) {}

    fn chapter_done(&mut self, _chapter: u32) {}

    fn chapter_failed(&mut self, _chapter: u32, _err: &FetchError) {}

    fn book_saved(&mut self, _path: &Path) {}

    /// Called at the end of the run with the final counters.
    fn finish(&mut self, _stats: &DownloadStats) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
