// src/specs/mod.rs
//! # Page specs
//!
//! One module per source page. Each spec encodes *where the data lives in the
//! HTML* and *how it maps onto our column schema*.
//!
//! ## What lives here
//! - **Pure parsing** of an already fetched [`RawPage`](crate::core::net::RawPage).
//! - **Shape validation** (column counts, cell thresholds).
//! - **Typed rows** plus a conversion into [`DataSet`](crate::data::DataSet) for display.
//!
//! ## What does **not** live here
//! - Fetching, caching, and turning failures into banners. That is `scan` and
//!   the front ends.
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → scan::Scanner::refresh → Fetch::fetch → specs::<page>::extract
//!                                   ↘ TtlCache::insert
//! ```
//!
//! ## Conventions
//! - Extractors never panic and never touch the network; same page in, same table out.
//! - Failures are returned as [`ScanError`](crate::error::ScanError); nothing is
//!   partially returned.
//!
//! ## Current specs
//! - `oi_spurts` – first HTML table, 4- or 7-column shape.
//! - `unusual_volume` – `.tv-data-table__tbody tr` rows with at least six cells.
pub mod oi_spurts;
pub mod unusual_volume;
