// src/error.rs
use std::time::Duration;

use thiserror::Error;

/// Everything that can go wrong between "refresh requested" and "table ready".
/// None of these is fatal; the shell shows an empty region plus the message.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("request to {url} timed out after {}s", .timeout.as_secs_f32())]
    NetworkTimeout { url: String, timeout: Duration },

    #[error("fetch failed for {url}: {reason}")]
    Fetch {
        url: String,
        reason: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("no tables found on {url}")]
    NoTableFound { url: String },

    #[error("column mismatch! expected 4 or 7 columns but got {count}; raw columns: {columns:?}")]
    ColumnShapeMismatch { count: usize, columns: Vec<String> },

    #[error("selector `{selector}` gave no usable rows ({matched} matched)")]
    SelectorMiss { selector: String, matched: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl ScanError {
    /// A shape mismatch means the page loaded but changed; everything else is a hard miss.
    pub fn severity(&self) -> Severity {
        match self {
            ScanError::ColumnShapeMismatch { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    pub(crate) fn from_reqwest(url: &str, timeout: Duration, e: reqwest::Error) -> Self {
        if e.is_timeout() {
            return ScanError::NetworkTimeout { url: s!(url), timeout };
        }
        ScanError::Fetch {
            url: s!(url),
            reason: e.to_string(),
            source: Some(e),
        }
    }
}
