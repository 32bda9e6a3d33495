// src/gui/actions/copy.rs
use eframe::egui;

use crate::{config::options::Source, csv, gui::{app::App, router}};

/// Copy one region's table to the clipboard as TSV with headers.
pub fn copy(app: &mut App, ui_ctx: &egui::Context, source: Source) {
    let Some(ds) = app.results.as_ref().and_then(|r| r.table(source)) else {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    };

    let rows = ds.row_count();
    let txt = csv::to_export_string(ds, true, '\t');
    logf!("Copy: source={}, rows={}", source.slug(), rows);

    ui_ctx.copy_text(txt);
    app.status(format!("Copied {} rows of {} to clipboard", rows, router::page_for(source).title()));
}
