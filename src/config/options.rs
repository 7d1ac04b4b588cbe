// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

/// Which books of the manifest a download run touches.
/// Book numbers are the 1-based positions across both testaments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BookSelector {
    All,
    Numbers(Vec<u32>),
}

impl BookSelector {
    pub fn includes(&self, book_number: u32) -> bool {
        match self {
            BookSelector::All => true,
            BookSelector::Numbers(v) => v.binary_search(&book_number).is_ok(),
        }
    }

    /// Parse `"1-5,40"` style lists. Result is sorted and deduplicated.
    pub fn parse(s: &str) -> Result<Self, String> {
        let mut out = Vec::new();
        for part in s.split(',') {
            let part = part.trim();
            if part.is_empty() { continue; }
            if let Some((a, b)) = part.split_once('-') {
                let a: u32 = a.trim().parse().map_err(|_| format!("Invalid book number in range: {part}"))?;
                let b: u32 = b.trim().parse().map_err(|_| format!("Invalid book number in range: {part}"))?;
                if a == 0 || a > b { return Err(format!("Invalid range: {part}")); }
                if b > MAX_BOOK_NUMBER { return Err(format!("Book numbers stop at {MAX_BOOK_NUMBER}: {part}")); }
                out.extend(a..=b);
            } else {
                let v: u32 = part.parse().map_err(|_| format!("Invalid book number: {part}"))?;
                if v == 0 { return Err(s!("Book numbers start at 1")); }
                if v > MAX_BOOK_NUMBER { return Err(format!("Book numbers stop at {MAX_BOOK_NUMBER}: {part}")); }
                out.push(v);
            }
        }
        if out.is_empty() {
            return Err(s!("Empty book list"));
        }
        out.sort_unstable();
        out.dedup();
        Ok(BookSelector::Numbers(out))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadOptions {
    pub base_url: String,
    pub manifest: PathBuf,
    pub out_dir: PathBuf,
    pub stats_file: PathBuf,
    pub timeout: Duration,
    /// Pause after every chapter request. Zero disables sleeping.
    pub pause: Duration,
    pub books: BookSelector,
}

impl Default for DownloadOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            manifest: PathBuf::from(DEFAULT_MANIFEST),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            stats_file: PathBuf::from(DEFAULT_STATS_FILE),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            pause: Duration::from_millis(REQUEST_PAUSE_MS),
            books: BookSelector::All,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifyOptions {
    pub manifest: PathBuf,
    pub dir: PathBuf,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from(DEFAULT_MANIFEST),
            dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}
