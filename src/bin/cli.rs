// src/bin/cli.rs
use std::process::ExitCode;

use biblia_scrape::cli::{self, Cli};
use clap::Parser;

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    let args = Cli::parse();
    biblia_scrape::log::init(args.verbose, args.log_file.as_deref())?;
    Ok(cli::run(args)?)
}
