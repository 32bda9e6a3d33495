// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,refresh}.

mod copy;    // src/gui/actions/copy.rs
mod refresh; // src/gui/actions/refresh.rs

pub use copy::copy;
pub use refresh::refresh;
