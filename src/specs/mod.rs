// src/specs/mod.rs
//! # Page specs
//!
//! Page-specific scraping rules. Each module covers one page of the
//! remote site and encodes *where the data lives in the HTML* and *how to pull
//! it out tolerantly*.
//!
//! ## What lives here
//! - **Pure HTML parsing** of already-fetched documents.
//! - **Selector choice** (which rows count, which cell holds what).
//! - **Row-level tolerance**: a malformed row is skipped, never fatal on its own.
//!
//! ## What does **not** live here
//! - **Networking** – `scrape::fetch_chapter` fetches, then hands the body over.
//! - **Persistence** – book records are written by `file`.
//! - **Run bookkeeping** – statistics and pacing belong to `runner`.
//!
//! ## Typical call chain
//! ```text
//! runner::download_all → scrape::fetch_chapter → core::net::Fetch::get
//!                                              ↘ specs::chapter::parse_chapter
//! ```
//!
//! Everything here is testable **offline** against captured or hand-written pages.
pub mod chapter;
