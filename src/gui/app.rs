// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::{consts::WINDOW_TITLE, state::AppState},
    core::net::HttpFetcher,
    data::ScanResult,
    scan::Scanner,
};

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    let scanner = Scanner::http(&state.options.scan)?;
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state, scanner)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    pub scanner: Scanner<HttpFetcher>,

    // last refresh, kept for the session
    pub results: Option<ScanResult>,

    pub status: String,
}

impl App {
    pub fn new(state: AppState, scanner: Scanner<HttpFetcher>) -> Self {
        logf!("Init: cache ttl={}s", scanner.cache_ttl().as_secs());
        Self {
            state,
            scanner,
            results: None,
            status: s!("Idle"),
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("scanner_options")
            .resizable(false)
            .min_width(200.0)
            .show(ctx, |ui| {
                crate::gui::components::sidebar::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(WINDOW_TITLE);
            ui.separator();

            let total_h = ui.available_height();
            let split = self.state.gui.oi_split.clamp(0.2, 0.8);

            for (i, page) in crate::gui::router::all_pages().iter().enumerate() {
                let share = if i == 0 { split } else { 1.0 - split };
                if i > 0 { ui.separator(); }
                crate::gui::components::source_panel::draw(ui, self, *page, total_h * share);
            }
        });
    }
}
