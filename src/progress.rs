// src/progress.rs
use crate::config::options::Source;
use crate::error::ScanError;

/// Lightweight progress reporting for a refresh.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of sources to scan.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One source produced a table.
    fn item_done(&mut self, _source: Source, _rows: usize) {}

    /// One source failed; the others still run.
    fn item_failed(&mut self, _source: Source, _err: &ScanError) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
