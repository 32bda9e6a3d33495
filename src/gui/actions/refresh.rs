// src/gui/actions/refresh.rs
use crate::gui::{app::App, progress::GuiProgress};

/// Runs both scans on the UI thread and stores the result for the session.
pub fn refresh(app: &mut App) {
    logf!("UI: Refresh requested");

    // → This is where the fetching happens ←
    let result = {
        let mut prog = GuiProgress::new(&mut app.status);
        app.scanner.refresh(Some(&mut prog))
    };

    for msg in result.messages() {
        logd!("UI: banner → {msg}");
    }
    app.results = Some(result);
}
