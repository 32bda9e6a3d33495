// src/data.rs
//
// Table data shared by the extractors, the cache and the front ends.
//
// - DataSet: string-typed headers + rows, the only shape the GUI and CLI render.
// - Snapshot: one successful, normalized table for a source plus when it was fetched.
// - ScanResult: what one refresh produced for both sources. Owned by the shell.

use chrono::{DateTime, Local};

use crate::config::options::Source;
use crate::error::ScanError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn empty() -> Self {
        Self { headers: None, rows: Vec::new() }
    }

    pub fn with_headers(headers: &[&str], rows: Vec<Vec<String>>) -> Self {
        Self {
            headers: Some(headers.iter().map(|h| s!(*h)).collect()),
            rows,
        }
    }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn header_count(&self) -> usize { self.headers.as_ref().map_or(0, |h| h.len()) }

    /// Column count as a reader would see it: the wider of the header row and any body row.
    pub fn ncols(&self) -> usize {
        let widest = self.rows.iter().map(|r| r.len()).max().unwrap_or(0);
        widest.max(self.header_count())
    }

    /// Header text per column; columns without a label get their position.
    pub fn column_labels(&self) -> Vec<String> {
        let hs = self.headers.as_deref().unwrap_or(&[]);
        (0..self.ncols())
            .map(|i| match hs.get(i) {
                Some(h) if !h.is_empty() => h.clone(),
                _ => i.to_string(),
            })
            .collect()
    }

    pub fn header_labels(&self) -> Vec<String> {
        match &self.headers {
            Some(h) => h.clone(),
            None => self.column_labels(),
        }
    }
}

/// A successfully scanned table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub table: DataSet,
    pub fetched_at: DateTime<Local>,
    pub from_cache: bool,
}

/// Per-source result handed to the shell.
pub type Outcome = Result<Snapshot, ScanError>;

/// Result of one refresh: OI first, then volume.
#[derive(Debug)]
pub struct ScanResult {
    pub oi: Outcome,
    pub volume: Outcome,
    pub finished_at: DateTime<Local>,
}

impl ScanResult {
    pub fn outcome(&self, source: Source) -> &Outcome {
        match source {
            Source::OiSpurts      => &self.oi,
            Source::UnusualVolume => &self.volume,
        }
    }

    /// The table to render for `source`; empty when that source failed.
    pub fn table(&self, source: Source) -> Option<&DataSet> {
        self.outcome(source).as_ref().ok().map(|snap| &snap.table)
    }

    pub fn error(&self, source: Source) -> Option<&ScanError> {
        self.outcome(source).as_ref().err()
    }

    /// Human-readable failure lines, one per failed source.
    pub fn messages(&self) -> Vec<String> {
        Source::ALL
            .iter()
            .filter_map(|&src| self.error(src).map(|e| failure_message(src, e)))
            .collect()
    }
}

/// One line per failed source, for banners and stderr.
pub fn failure_message(source: Source, e: &ScanError) -> String {
    let what = match source {
        Source::OiSpurts      => "OI",
        Source::UnusualVolume => "volume",
    };
    format!("Error fetching {what} data: {e}")
}
