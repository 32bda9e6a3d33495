// src/gui/components/data_table.rs
//
// Draws one read-only table. Purely a view over a DataSet.

use eframe::egui::{self, Align, Color32, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{core::sanitize::looks_numeric, data::DataSet, gui::pages::Page};

const UP: Color32 = Color32::from_rgb(0x3C, 0xB3, 0x71);
const DOWN: Color32 = Color32::from_rgb(0xDC, 0x61, 0x49);

pub fn draw(ui: &mut egui::Ui, page: &dyn Page, ds: &DataSet, max_height: f32) {
    let labels = ds.header_labels();
    let cols = labels.len().max(ds.ncols());
    let widths = page.preferred_column_widths().unwrap_or(&[]);
    let non_numeric = page.non_numeric_columns();
    let signed = page.signed_columns();

    let mut table = TableBuilder::new(ui)
        .id_salt(("table_state", page.source()))
        .striped(true)
        .vscroll(true)
        .min_scrolled_height(0.0)
        .max_scroll_height(max_height);

    for ci in 0..cols {
        let w = widths.get(ci).copied().unwrap_or(90.0);
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
    }

    table
        .header(24.0, |mut header| {
            for ci in 0..cols {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    let text = labels.get(ci).cloned().unwrap_or_else(|| format!("Col {}", ci + 1));
                    let label = egui::Label::new(RichText::new(text).strong()).selectable(false);
                    if non_numeric.contains(&ci) {
                        ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.add(label); });
                    } else {
                        ui.centered_and_justified(|ui| { ui.add(label); });
                    }
                });
            }
        })
        .body(|body| {
            body.rows(20.0, ds.rows.len(), |mut row| {
                let Some(data) = ds.rows.get(row.index()) else { return };
                for ci in 0..cols {
                    let cell = data.get(ci).map(String::as_str).unwrap_or("");
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        let mut rt = RichText::new(cell);
                        if signed.contains(&ci) && looks_numeric(cell) {
                            rt = if cell.trim_start().starts_with(['-', '−']) {
                                rt.color(DOWN)
                            } else {
                                rt.color(UP)
                            };
                        }
                        if non_numeric.contains(&ci) || !looks_numeric(cell) {
                            ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(rt); });
                        } else {
                            ui.centered_and_justified(|ui| { ui.label(rt); });
                        }
                    });
                }
            });
        });
}
