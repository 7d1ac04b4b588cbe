// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.bibliaortodoxa.ro";
pub const CHAPTER_PATH: &str = "/carte.php";
pub const USER_AGENT: &str = concat!("biblia_scrape/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

// Chapter page markup
pub const VERSE_ROW_PREFIX: &str = "verset";
pub const VERSE_NUMBER_CLASS: &str = "nr";

// Local files
pub const DEFAULT_MANIFEST: &str = "bible_books_metadata.json";
pub const DEFAULT_OUT_DIR: &str = "bible_books";
pub const DEFAULT_STATS_FILE: &str = "download_stats.json";
pub const ARTIFACT_EXT: &str = "json";

// Pacing
pub const REQUEST_PAUSE_MS: u64 = 500; // be polite

// Book selection
pub const MAX_BOOK_NUMBER: u32 = 999;
