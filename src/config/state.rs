// src/config/state.rs
use super::options::AppOptions;
use super::consts::{WINDOW_W, WINDOW_H};

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: f32,
    pub window_h: f32,

    /// Share of the central area given to the OI table (rest goes to volume).
    pub oi_split: f32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: WINDOW_W,
            window_h: WINDOW_H,
            oi_split: 0.5,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
