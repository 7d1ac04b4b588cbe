// src/core/sanitize.rs
use crate::model::VerseNumber;

/// Filename-safe form of a book name: spaces and path separators become `_`.
/// Writer and verifier must agree on this exactly.
pub fn safe_name(name: &str) -> String {
    name.chars()
        .map(|c| if c == ' ' || c == '/' || c == '\\' { '_' } else { c })
        .collect()
}

/// Interpret the text of a verse-number marker such as `"12."`.
/// Falls back to the raw trimmed text when it is not a plain integer.
pub fn verse_number(raw: &str) -> VerseNumber {
    let t = raw.trim();
    let t = t.strip_suffix('.').unwrap_or(t).trim_end();
    if !t.is_empty() && t.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(n) = t.parse::<u64>() {
            return VerseNumber::Number(n);
        }
    }
    VerseNumber::Raw(t.to_string())
}
