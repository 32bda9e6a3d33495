// src/core/net.rs
//
// Blocking HTTP GET with a browser user agent and a fixed timeout.

use std::time::Duration;

use chrono::{DateTime, Local};
use reqwest::blocking::Client;

use crate::config::options::ScanOptions;
use crate::error::ScanError;

/// Body of one HTTP response. Lives only until it has been parsed.
#[derive(Clone, Debug)]
pub struct RawPage {
    pub url: String,
    pub body: String,
    pub fetched_at: DateTime<Local>,
}

impl RawPage {
    pub fn new(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self { url: url.into(), body: body.into(), fetched_at: Local::now() }
    }
}

/// Anything that can turn a URL into a page. The scanner only talks to this.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<RawPage, ScanError>;
}

pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(opts: &ScanOptions) -> Result<Self, ScanError> {
        let client = Client::builder()
            .user_agent(opts.user_agent.as_str())
            .timeout(opts.timeout)
            .connect_timeout(opts.timeout)
            .build()
            .map_err(ScanError::Client)?;
        Ok(Self { client, timeout: opts.timeout })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<RawPage, ScanError> {
        logd!("Net: GET {url}");

        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| ScanError::from_reqwest(url, self.timeout, e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScanError::Fetch {
                url: s!(url),
                reason: format!("HTTP error: {status}"),
                source: None,
            });
        }

        let body = resp
            .text()
            .map_err(|e| ScanError::from_reqwest(url, self.timeout, e))?;

        logd!("Net: {url} → {} bytes", body.len());
        Ok(RawPage::new(url, body))
    }
}
