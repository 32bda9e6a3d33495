// src/gui/router.rs
use crate::config::options::Source;
use super::pages::{ self, Page };

/// Display order: OI on top, volume below.
pub static PAGES: &[&'static dyn Page] = &[
    &pages::oi_spurts::PAGE,
    &pages::unusual_volume::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn page_for(source: Source) -> &'static dyn Page {
    match source {
        Source::OiSpurts      => &pages::oi_spurts::PAGE,
        Source::UnusualVolume => &pages::unusual_volume::PAGE,
    }
}
