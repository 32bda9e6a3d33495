// src/specs/unusual_volume.rs
//
// Unusual volume page: rows live under a fixed structural path. Rows with fewer
// than six cells are headers/separators and are skipped. Of the rest we keep
// cells 0, 1, 2 and 5.

use scraper::{ElementRef, Selector};

use crate::core::{html, net::RawPage};
use crate::data::DataSet;
use crate::error::ScanError;

pub const ROW_SELECTOR: &str = ".tv-data-table__tbody tr";
pub const HEADERS: [&str; 4] = ["Stock", "Price", "Change", "Rel Volume"];

const MIN_CELLS: usize = 6;
const REL_VOLUME_CELL: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VolumeMoverRow {
    pub stock: String,
    pub price: String,
    pub change: String,
    pub rel_volume: String,
}

impl VolumeMoverRow {
    /// None for rows below the cell threshold.
    fn from_cells(cells: &[ElementRef<'_>]) -> Option<Self> {
        if cells.len() < MIN_CELLS {
            return None;
        }
        let text = |i: usize| cells[i].text().collect::<String>().trim().to_string();
        Some(Self {
            stock: text(0),
            price: text(1),
            change: text(2),
            rel_volume: text(REL_VOLUME_CELL),
        })
    }

    pub fn cells(&self) -> Vec<String> {
        vec![self.stock.clone(), self.price.clone(), self.change.clone(), self.rel_volume.clone()]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VolumeMovers {
    pub rows: Vec<VolumeMoverRow>,
}

impl From<VolumeMovers> for DataSet {
    fn from(t: VolumeMovers) -> Self {
        DataSet::with_headers(&HEADERS, t.rows.iter().map(|r| r.cells()).collect())
    }
}

pub fn extract(page: &RawPage) -> Result<VolumeMovers, ScanError> {
    let miss = |matched| ScanError::SelectorMiss { selector: s!(ROW_SELECTOR), matched };

    let row_sel = Selector::parse(ROW_SELECTOR).map_err(|_| miss(0))?;
    let cell_sel = Selector::parse("td").map_err(|_| miss(0))?;

    let doc = html::parse(&page.body);

    let mut matched = 0usize;
    let mut rows = Vec::new();
    for tr in doc.select(&row_sel) {
        matched += 1;
        let cells: Vec<ElementRef<'_>> = tr.select(&cell_sel).collect();
        match VolumeMoverRow::from_cells(&cells) {
            Some(row) => rows.push(row),
            None => logd!("Volume: skipping row {matched} ({} cells)", cells.len()),
        }
    }

    if rows.is_empty() {
        logw!("Volume: `{ROW_SELECTOR}` matched {matched} row(s), none usable");
        return Err(miss(matched));
    }

    logd!("Volume: kept {}/{} rows", rows.len(), matched);
    Ok(VolumeMovers { rows })
}
