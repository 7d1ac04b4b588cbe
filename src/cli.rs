// src/cli.rs
use std::{
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
    time::Duration,
};

use clap::{Args, Parser, Subcommand};

use crate::{
    config::{
        consts::*,
        options::{BookSelector, DownloadOptions, VerifyOptions},
    },
    core::net::HttpFetcher,
    error::{FetchError, Result},
    manifest::{BookDescriptor, Manifest, Testament},
    model::DownloadStats,
    progress::Progress,
    runner,
    verify::{self, VerificationReport},
};

const RULE: &str = "======================================================================";

#[derive(Parser)]
#[command(author, version, about = "Romanian Orthodox Bible scraper and completeness checker", long_about = None)]
pub struct Cli {
    /// Debug-level diagnostics (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Append diagnostics to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Download every chapter listed in the manifest, one JSON file per book
    Download(DownloadArgs),
    /// Check downloaded books against the manifest; exits 1 on any issue
    Verify(VerifyArgs),
}

#[derive(Args)]
pub struct DownloadArgs {
    #[arg(long, default_value = DEFAULT_MANIFEST)]
    pub manifest: PathBuf,
    /// Output directory for book files
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    pub out: PathBuf,
    #[arg(long, default_value = DEFAULT_STATS_FILE)]
    pub stats: PathBuf,
    #[arg(long, default_value = BASE_URL)]
    pub base_url: String,
    /// Pause between chapter requests
    #[arg(long, default_value_t = REQUEST_PAUSE_MS)]
    pub pause_ms: u64,
    #[arg(long, default_value_t = REQUEST_TIMEOUT_SECS)]
    pub timeout_secs: u64,
    /// Only these book numbers, e.g. `1-5,40`
    #[arg(long, value_parser = BookSelector::parse)]
    pub books: Option<BookSelector>,
}

#[derive(Args)]
pub struct VerifyArgs {
    #[arg(long, default_value = DEFAULT_MANIFEST)]
    pub manifest: PathBuf,
    /// Directory holding the book files
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    pub dir: PathBuf,
}

impl From<DownloadArgs> for DownloadOptions {
    fn from(a: DownloadArgs) -> Self {
        Self {
            base_url: a.base_url,
            manifest: a.manifest,
            out_dir: a.out,
            stats_file: a.stats,
            timeout: Duration::from_secs(a.timeout_secs),
            pause: Duration::from_millis(a.pause_ms),
            books: a.books.unwrap_or(BookSelector::All),
        }
    }
}

impl From<VerifyArgs> for VerifyOptions {
    fn from(a: VerifyArgs) -> Self {
        Self { manifest: a.manifest, dir: a.dir }
    }
}

pub fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Command::Download(args) => run_download(&args.into()),
        Command::Verify(args) => run_verify(&args.into()),
    }
}

fn run_download(opts: &DownloadOptions) -> Result<ExitCode> {
    let manifest = Manifest::load(&opts.manifest)?;
    let fetcher = HttpFetcher::new(opts.timeout)?;
    let mut console = ConsoleProgress::new(&opts.out_dir);

    runner::download_all(&manifest, &fetcher, opts, Some(&mut console))?;
    Ok(ExitCode::SUCCESS)
}

fn run_verify(opts: &VerifyOptions) -> Result<ExitCode> {
    let manifest = Manifest::load(&opts.manifest)?;

    println!("Verifying Bible chapter completeness...");
    println!("{}", &RULE[..60]);

    let report = verify::verify(&manifest, &opts.dir)?;
    print_report(&report);

    Ok(if report.overall_pass { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn print_report(report: &VerificationReport) {
    for book in &report.books {
        for issue in report.issues_of(book) {
            println!("✗ {issue}");
        }
        if let (true, Some(found)) = (book.passed(), book.found) {
            println!("✓ {} ({}): {found} chapters verified", book.name_en, book.name_ro);
        }
    }

    println!("\n{}", &RULE[..60]);
    println!("VERIFICATION SUMMARY");
    println!("{}", &RULE[..60]);
    println!("Total expected chapters: {}", report.total_expected);
    println!("Total found chapters: {}", report.total_found);

    if report.overall_pass {
        println!("\n✓✓✓ ALL CHAPTERS VERIFIED SUCCESSFULLY! ✓✓✓");
    } else {
        println!("\n✗ Issues found: {}", report.issues.len());
        println!("\nMissing or incomplete:");
        for issue in &report.issues {
            println!("  - [{}] {issue}", issue.reason());
        }
    }
}

/// Prints one line per chapter with a ✓/✗ marker.
struct ConsoleProgress<'a> {
    out_dir: &'a Path,
}

impl<'a> ConsoleProgress<'a> {
    fn new(out_dir: &'a Path) -> Self {
        Self { out_dir }
    }
}

impl Progress for ConsoleProgress<'_> {
    fn begin(&mut self, books: usize, chapters: u64) {
        println!("Downloading {books} books, {chapters} chapters");
    }

    fn testament(&mut self, testament: Testament) {
        println!("\n{RULE}\n{testament}\n{RULE}");
    }

    fn book_started(&mut self, number: u32, book: &BookDescriptor) {
        println!(
            "\nBook #{number:2}: {} ({}) - {} chapters",
            book.name_en, book.name_ro, book.chapters
        );
    }

    fn chapter_started(&mut self, chapter: u32, of: u32) {
        print!("  Chapter {chapter:3}/{of}... ");
        let _ = io::stdout().flush();
    }

    fn chapter_done(&mut self, _chapter: u32) {
        println!("✓");
    }

    fn chapter_failed(&mut self, _chapter: u32, err: &FetchError) {
        println!("✗ ({})", err.kind());
    }

    fn book_saved(&mut self, path: &Path) {
        println!("  ✓ Saved to {}", path.display());
    }

    fn finish(&mut self, stats: &DownloadStats) {
        println!("\n{RULE}\nDOWNLOAD COMPLETE\n{RULE}");
        println!("Total books: {}", stats.total_books);
        println!("Total chapters: {}", stats.total_chapters);
        println!("Successful: {}", stats.successful_chapters);
        println!("Failed: {}", stats.failed_chapters);
        if let Some(rate) = stats.success_rate() {
            println!("Success rate: {rate:.1}%");
        }
        println!("\nFiles saved in: {}/", self.out_dir.display());
    }
}
