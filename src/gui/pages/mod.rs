// src/gui/pages/mod.rs
use crate::config::options::Source;

pub mod oi_spurts;
pub mod unusual_volume;

/// Per-source display hints. Pages never fetch; the scanner does.
pub trait Page: Send + Sync + 'static {
    fn source(&self) -> Source;

    fn title(&self) -> &'static str {
        self.source().title()
    }

    /// Shown in the region until a table has been loaded.
    fn placeholder(&self) -> &'static str;

    /// Optional: per-page column widths (in px-ish)
    fn preferred_column_widths(&self) -> Option<&'static [f32]> { None }

    /// Columns rendered left-aligned; everything else is centred.
    fn non_numeric_columns(&self) -> &'static [usize] { &[0] }

    /// Columns coloured by sign (green up, red down).
    fn signed_columns(&self) -> &'static [usize] { &[] }
}
