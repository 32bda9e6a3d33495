// src/gui/pages/oi_spurts.rs
use crate::config::options::Source;

pub struct OiSpurtsPage;
pub static PAGE: OiSpurtsPage = OiSpurtsPage;

impl super::Page for OiSpurtsPage {
    fn source(&self) -> Source { Source::OiSpurts }

    fn placeholder(&self) -> &'static str { "Click 'Refresh Data' to load OI spurts." }

    // Stock, Price, Chg %, OI, OI Chg %, Vol, Vol Chg %
    fn preferred_column_widths(&self) -> Option<&'static [f32]> {
        Some(&[200.0, 90.0, 80.0, 110.0, 80.0, 110.0, 80.0])
    }

    fn signed_columns(&self) -> &'static [usize] { &[2, 4, 6] }
}
