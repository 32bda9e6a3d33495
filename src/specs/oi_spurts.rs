// src/specs/oi_spurts.rs
//
// OI spurts page: the data is the first table on the page. Its width has been
// seen both as 4 and as 7+ columns, so the shape is chosen from the width.

use crate::core::{html, net::RawPage};
use crate::data::DataSet;
use crate::error::ScanError;

pub const HEADERS_4: [&str; 4] = ["Stock", "Price", "Chg %", "OI"];
pub const HEADERS_7: [&str; 7] = ["Stock", "Price", "Chg %", "OI", "OI Chg %", "Vol", "Vol Chg %"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OiShape {
    Four,
    Seven,
}

impl OiShape {
    /// 4 → Four, 7 or more → Seven, anything else has no shape.
    pub fn from_width(ncols: usize) -> Option<OiShape> {
        match ncols {
            4 => Some(OiShape::Four),
            n if n >= 7 => Some(OiShape::Seven),
            _ => None,
        }
    }

    pub fn headers(self) -> &'static [&'static str] {
        match self {
            OiShape::Four  => &HEADERS_4,
            OiShape::Seven => &HEADERS_7,
        }
    }

    pub fn width(self) -> usize { self.headers().len() }
}

/// Extra columns present only in the 7-column shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OiDetail {
    pub oi_chg_pct: String,
    pub vol: String,
    pub vol_chg_pct: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OiSpurtRow {
    pub stock: String,
    pub price: String,
    pub chg_pct: String,
    pub oi: String,
    /// Some(..) iff the table shape is `Seven`.
    pub detail: Option<OiDetail>,
}

impl OiSpurtRow {
    fn from_cells(shape: OiShape, mut cells: Vec<String>) -> Self {
        cells.resize(shape.width(), s!());
        let mut it = cells.into_iter();
        let mut next = || it.next().unwrap_or_default();

        let stock = next();
        let price = next();
        let chg_pct = next();
        let oi = next();
        let detail = match shape {
            OiShape::Four => None,
            OiShape::Seven => Some(OiDetail {
                oi_chg_pct: next(),
                vol: next(),
                vol_chg_pct: next(),
            }),
        };
        Self { stock, price, chg_pct, oi, detail }
    }

    pub fn cells(&self) -> Vec<String> {
        let mut out = vec![self.stock.clone(), self.price.clone(), self.chg_pct.clone(), self.oi.clone()];
        if let Some(d) = &self.detail {
            out.extend([d.oi_chg_pct.clone(), d.vol.clone(), d.vol_chg_pct.clone()]);
        }
        out
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OiSpurts {
    pub shape: OiShape,
    pub rows: Vec<OiSpurtRow>,
}

impl From<OiSpurts> for DataSet {
    fn from(t: OiSpurts) -> Self {
        DataSet::with_headers(t.shape.headers(), t.rows.iter().map(|r| r.cells()).collect())
    }
}

pub fn extract(page: &RawPage) -> Result<OiSpurts, ScanError> {
    let doc = html::parse(&page.body);
    let tables = html::read_tables(&doc);

    let Some(first) = tables.into_iter().next() else {
        return Err(ScanError::NoTableFound { url: page.url.clone() });
    };
    relabel(first)
}

/// Map the first table onto the canonical schema, or explain why it doesn't fit.
pub fn relabel(table: DataSet) -> Result<OiSpurts, ScanError> {
    let ncols = table.ncols();
    let Some(shape) = OiShape::from_width(ncols) else {
        logw!("OI: column mismatch, got {ncols}: {:?}", table.column_labels());
        return Err(ScanError::ColumnShapeMismatch {
            count: ncols,
            columns: table.column_labels(),
        });
    };

    if ncols > shape.width() {
        logd!("OI: dropping {} trailing column(s)", ncols - shape.width());
    }

    let rows = table.rows
        .into_iter()
        .map(|mut cells| {
            cells.truncate(shape.width());
            OiSpurtRow::from_cells(shape, cells)
        })
        .collect();

    Ok(OiSpurts { shape, rows })
}
