// src/gui/progress.rs
use crate::config::options::Source;
use crate::error::ScanError;
use crate::progress::Progress;

/// Writes refresh progress into the sidebar status line.
pub struct GuiProgress<'a> {
    status: &'a mut String,
    done: usize,
    failed: usize,
    total: usize,
}

impl<'a> GuiProgress<'a> {
    pub fn new(status: &'a mut String) -> Self {
        Self { status, done: 0, failed: 0, total: 0 }
    }
    fn set_status(&mut self, msg: impl Into<String>) {
        *self.status = msg.into();
    }
}

impl Progress for GuiProgress<'_> {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.set_status("Fetching latest data…");
    }
    fn log(&mut self, msg: &str) {
        self.set_status(msg);
    }
    fn item_done(&mut self, source: Source, rows: usize) {
        self.done += 1;
        self.set_status(format!("{}: {} rows ({}/{})", source.title(), rows, self.done + self.failed, self.total));
    }
    fn item_failed(&mut self, source: Source, _err: &ScanError) {
        self.failed += 1;
        self.set_status(format!("{}: failed ({}/{})", source.title(), self.done + self.failed, self.total));
    }
    fn finish(&mut self) {
        if self.failed == 0 {
            self.set_status("Data refreshed!");
        } else {
            let msg = format!("Refreshed with {} error(s)", self.failed);
            self.set_status(msg);
        }
    }
}
