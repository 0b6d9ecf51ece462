// src/gui/components/data_table.rs
//
// Full dataset as a striped, scrollable grid. Purely a view.

use eframe::egui;
use egui_extras::{Column, TableBuilder};
use crate::gui::app::App;

const ROW_H: f32 = 18.0;
const HEADER_H: f32 = 20.0;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let Some(ds) = app.session.dataset() else { return };

    egui::ScrollArea::horizontal().show(ui, |ui| {
        let mut table = TableBuilder::new(ui)
            .striped(true)
            .min_scrolled_height(0.0)
            .column(Column::auto().at_least(24.0));
        for _ in 0..ds.width() {
            table = table.column(Column::auto().at_least(40.0).resizable(true).clip(true));
        }

        table
            .header(HEADER_H, |mut header| {
                header.col(|_| {});
                for h in ds.headers() {
                    header.col(|ui| {
                        ui.strong(h);
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_H, ds.len(), |mut row| {
                    let i = row.index();
                    row.col(|ui| {
                        ui.weak(i.to_string());
                    });
                    for cell in ds.row(i).unwrap_or_default() {
                        row.col(|ui| {
                            ui.label(cell);
                        });
                    }
                });
            });
    });
}
