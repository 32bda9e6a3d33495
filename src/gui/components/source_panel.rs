// src/gui/components/source_panel.rs
//
// One region per source: heading, failure banner, then the table or a placeholder.

use eframe::egui;

use crate::{
    data::failure_message,
    error::Severity,
    gui::{actions, app::App, pages::Page},
};

// heading + banner + spacing, roughly
const CHROME_H: f32 = 64.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App, page: &dyn Page, height: f32) {
    let source = page.source();
    let mut copy_clicked = false;

    let snapshot = app.results.as_ref().and_then(|r| r.outcome(source).as_ref().ok());
    let error = app.results.as_ref().and_then(|r| r.error(source));

    ui.horizontal(|ui| {
        ui.heading(page.title());
        if let Some(snap) = snapshot.filter(|s| !s.table.is_empty()) {
            if ui.button("Copy").on_hover_text("Copy table as TSV").clicked() {
                copy_clicked = true;
            }
            let origin = if snap.from_cache { " (cached)" } else { "" };
            ui.weak(format!(
                "{} rows · fetched {}{}",
                snap.table.row_count(),
                snap.fetched_at.format("%H:%M:%S"),
                origin,
            ));
        }
    });

    if let Some(e) = error {
        let color = match e.severity() {
            Severity::Warning => ui.visuals().warn_fg_color,
            Severity::Error => ui.visuals().error_fg_color,
        };
        ui.colored_label(color, failure_message(source, e));
    }

    match snapshot {
        Some(snap) if !snap.table.is_empty() => {
            let max_h = (height - CHROME_H).max(80.0);
            super::data_table::draw(ui, page, &snap.table, max_h);
        }
        _ => {
            ui.label(page.placeholder());
        }
    }

    // Handle copy after the borrow of app.results ends
    if copy_clicked {
        actions::copy(app, ui.ctx(), source);
    }
}
