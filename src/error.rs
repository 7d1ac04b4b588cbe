// src/error.rs
use std::path::PathBuf;

/// Genuine faults. Anything here stops the current command.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Cannot decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Why a single chapter could not be produced. Never fatal to a run.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("no verse rows in page")]
    ParseEmpty,

    #[error("verse rows present but none were usable")]
    ExtractionEmpty,
}

impl FetchError {
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Transport(_) => "transport",
            FetchError::ParseEmpty => "parse-empty",
            FetchError::ExtractionEmpty => "extraction-empty",
        }
    }
}
