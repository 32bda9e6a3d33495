// src/gui/components/sidebar.rs
//
// Scanner options: the refresh trigger, the status line and cache info.

use eframe::egui;

use crate::{config::options::Source, gui::{actions, app::App}};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Scanner Options");
    ui.add_space(6.0);

    let red = egui::Color32::from_rgb(220, 30, 30);
    let black = egui::Color32::BLACK;

    let button_refresh = ui.add(
        egui::Button::new(
            egui::RichText::new("Refresh Data")
            .color(black)
            .strong())
        .fill(red));

    if button_refresh.clicked() {
        actions::refresh(app);
    }

    ui.add_space(6.0);
    ui.label(app.status.as_str());
    ui.separator();

    if let Some(res) = &app.results {
        ui.label(format!("Last refresh: {}", res.finished_at.format("%H:%M:%S")));
    } else {
        ui.label("Not refreshed yet");
    }

    ui.label(format!("Cache: {} min", app.scanner.cache_ttl().as_secs() / 60));
    for src in Source::ALL {
        if let Some(left) = app.scanner.cache_remaining(src) {
            ui.small(format!("{}: cached, {}s left", src.title(), left.as_secs()));
        }
    }
}
