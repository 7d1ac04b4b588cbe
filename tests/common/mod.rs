// tests/common/mod.rs
//
// Offline helpers: a scripted transport and hand-written chapter pages.
//
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use biblia_scrape::core::net::{Fetch, TransportError};
use biblia_scrape::manifest::{BookDescriptor, Manifest};
use biblia_scrape::model::BookId;

pub const BASE: &str = "http://bible.test";

/// Serves canned bodies by URL; unknown URLs fail like a 404.
#[derive(Default)]
pub struct ScriptedFetcher {
    pages: HashMap<String, Result<String, String>>,
    pub calls: RefCell<Vec<String>>,
}

impl ScriptedFetcher {
    pub fn page(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.pages.insert(url.into(), Ok(body.into()));
        self
    }

    pub fn failing(mut self, url: impl Into<String>, msg: &str) -> Self {
        self.pages.insert(url.into(), Err(msg.to_string()));
        self
    }
}

impl Fetch for ScriptedFetcher {
    fn get(&self, url: &str) -> Result<String, TransportError> {
        self.calls.borrow_mut().push(url.to_string());
        match self.pages.get(url) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(msg)) => Err(msg.clone().into()),
            None => Err(format!("HTTP error: 404 Not Found for {url}").into()),
        }
    }
}

pub fn url(book: u64, chapter: u32) -> String {
    format!("{BASE}/carte.php?id={book}&cap={chapter}")
}

pub fn row(n: &str, text: &str) -> String {
    format!(r#"<tr id="verset{n}"><td><span class="nr">{n}.</span></td><td>{text}</td></tr>"#)
}

/// A chapter page holding `rows` inside the usual verse table.
pub fn chapter_page(rows: &[String]) -> String {
    format!(
        "<!DOCTYPE html><html><head><title>Biblia</title></head><body>\
         <table class=\"capitol\">{}</table></body></html>",
        rows.concat()
    )
}

/// A page with `n` numbered verses.
pub fn numbered_page(n: u32) -> String {
    let rows: Vec<String> = (1..=n).map(|i| row(&i.to_string(), &format!("Versetul {i}"))).collect();
    chapter_page(&rows)
}

pub fn descriptor(id: u64, name_en: &str, name_ro: &str, chapters: u32) -> BookDescriptor {
    BookDescriptor {
        id: BookId::Number(id),
        name_en: name_en.to_string(),
        name_ro: name_ro.to_string(),
        chapters,
        url: format!("{BASE}/carte.php?id={id}"),
    }
}

pub fn manifest(old: Vec<BookDescriptor>, new: Vec<BookDescriptor>) -> Manifest {
    Manifest::new(old, new)
}
