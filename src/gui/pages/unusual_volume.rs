// src/gui/pages/unusual_volume.rs
use crate::config::options::Source;

pub struct UnusualVolumePage;
pub static PAGE: UnusualVolumePage = UnusualVolumePage;

impl super::Page for UnusualVolumePage {
    fn source(&self) -> Source { Source::UnusualVolume }

    fn placeholder(&self) -> &'static str { "Click 'Refresh Data' to load unusual volume movers." }

    // Stock, Price, Change, Rel Volume
    fn preferred_column_widths(&self) -> Option<&'static [f32]> {
        Some(&[300.0, 100.0, 90.0, 100.0])
    }

    fn signed_columns(&self) -> &'static [usize] { &[2] }
}
