// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod specs;

pub mod error;
pub mod file;
pub mod manifest;
pub mod model;
pub mod progress;
pub mod runner;
pub mod scrape;
pub mod verify;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod log;

pub use error::{Error, FetchError, Result};
