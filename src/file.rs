// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use serde::{Serialize, de::DeserializeOwned};

use crate::config::consts::ARTIFACT_EXT;
use crate::core::sanitize::safe_name;
use crate::error::{Error, Result};
use crate::model::{BookRecord, DownloadStats};

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::Io(std::io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        ))));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// `07_Judecatori.json` style name for a book artifact.
pub fn artifact_file_name(book_number: u32, name_ro: &str) -> String {
    format!("{book_number:02}_{}.{ARTIFACT_EXT}", safe_name(name_ro))
}

/// Write a book record into `dir`, replacing any previous artifact for it.
pub fn write_book(dir: &Path, book: &BookRecord) -> Result<PathBuf> {
    ensure_directory(dir)?;
    let path = dir.join(artifact_file_name(book.book_number, &book.name_ro));
    write_json(&path, book)?;
    Ok(path)
}

pub fn read_book(path: &Path) -> Result<BookRecord> {
    read_json(path)
}

/// Decode any JSON document; syntax or shape errors carry the file path.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path)?;
    serde_json::from_str(&text).map_err(|source| Error::Decode { path: path.to_path_buf(), source })
}

pub fn write_stats(path: &Path, stats: &DownloadStats) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    write_json(path, stats)
}

/// Locate the artifact written for `name_ro`, whatever its book number.
///
/// Candidates must look like `??_<name>.json`, and the stem must end in
/// `_<name>` exactly, so `Ioan` never picks up `I_Ioan`. A missing directory
/// simply yields no match.
pub fn find_artifact(dir: &Path, name_ro: &str) -> Result<Option<PathBuf>> {
    if !dir.is_dir() {
        return Ok(None);
    }
    let safe = safe_name(name_ro);
    let suffix = format!("_{safe}.{ARTIFACT_EXT}");
    let stem_suffix = format!("_{safe}");

    let mut hits = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() { continue; }
        let Some(name) = path.file_name().and_then(|s| s.to_str()) else { continue };

        let two_char_prefix = name
            .strip_suffix(&suffix)
            .is_some_and(|prefix| prefix.chars().count() == 2);
        if !two_char_prefix { continue; }

        let stem_ok = path
            .file_stem()
            .and_then(|s| s.to_str())
            .is_some_and(|stem| stem.ends_with(&stem_suffix));
        if stem_ok {
            hits.push(path);
        }
    }

    hits.sort();
    Ok(hits.into_iter().next())
}

// Pretty-printed, non-ASCII kept literal.
fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut out, value)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}
