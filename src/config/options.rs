// src/config/options.rs
use std::time::Duration;

use super::consts::*;

/// The two pages we scan. Doubles as the cache key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Source {
    OiSpurts,
    UnusualVolume,
}

impl Source {
    pub const ALL: [Source; 2] = [Source::OiSpurts, Source::UnusualVolume];

    pub fn url(self) -> &'static str {
        match self {
            Source::OiSpurts      => OI_SPURTS_URL,
            Source::UnusualVolume => UNUSUAL_VOLUME_URL,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Source::OiSpurts      => "Open Interest Spurts",
            Source::UnusualVolume => "Unusual Volume Movers",
        }
    }

    /// Short name used in log lines and CLI arguments.
    pub fn slug(self) -> &'static str {
        match self {
            Source::OiSpurts      => "oi",
            Source::UnusualVolume => "volume",
        }
    }

    pub fn from_slug(s: &str) -> Option<Source> {
        match s.to_ascii_lowercase().as_str() {
            "oi" | "oi-spurts"             => Some(Source::OiSpurts),
            "volume" | "vol" | "unusual-volume" => Some(Source::UnusualVolume),
            _ => None,
        }
    }
}

/// Which sources a run should touch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceSelector {
    All,
    One(Source),
}

impl SourceSelector {
    pub fn sources(&self) -> Vec<Source> {
        match self {
            SourceSelector::All    => Source::ALL.to_vec(),
            SourceSelector::One(s) => vec![*s],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanOptions {
    pub user_agent: String,
    pub timeout: Duration,
    pub cache_ttl: Duration,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            user_agent: s!(USER_AGENT),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            cache_ttl: Duration::from_secs(CACHE_TTL_SECS),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub scan: ScanOptions,
    pub sources: SourceSelector,
    pub output: OutputOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            scan: ScanOptions::default(),
            sources: SourceSelector::All,
            output: OutputOptions::default(),
        }
    }
}
