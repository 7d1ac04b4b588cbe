// src/core/net.rs
// Page transport. One blocking GET per call, no retries.

use std::{error::Error, time::Duration};

use crate::config::consts::USER_AGENT;

pub type TransportError = Box<dyn Error + Send + Sync>;

/// Anything that can turn a URL into a page body.
/// Non-success status codes must come back as errors, not bodies.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<String, TransportError>;
}

impl<F: Fetch + ?Sized> Fetch for &F {
    fn get(&self, url: &str) -> Result<String, TransportError> {
        (**self).get(url)
    }
}

/// `reqwest` blocking client with a fixed per-request timeout.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> crate::Result<Self> {
        Ok(Self::from_client(Self::builder(timeout).build()?))
    }

    /// Client settings used by [`HttpFetcher::new`], open for further tweaks.
    pub fn builder(timeout: Duration) -> reqwest::blocking::ClientBuilder {
        reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
    }

    pub fn from_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<String, TransportError> {
        let resp = self
            .client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| describe(&e))?;
        resp.text().map_err(|e| describe(&e).into())
    }
}

/// Short, log-friendly classification of a transport failure.
fn describe(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        format!("request timed out: {e}")
    } else if e.is_connect() {
        format!("connection failed: {e}")
    } else if let Some(status) = e.status() {
        format!("HTTP error: {status}")
    } else if e.is_decode() || e.is_body() {
        format!("unreadable response body: {e}")
    } else {
        format!("request failed: {e}")
    }
}
