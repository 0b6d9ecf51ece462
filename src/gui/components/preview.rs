// src/gui/components/preview.rs
//
// Preview pane: aligned text (first N rows) or the full grid.

use eframe::egui;
use crate::gui::app::App;

use super::data_table;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut rows_changed = false;
    ui.horizontal(|ui| {
        ui.label("Preview:");
        rows_changed = ui
            .add(egui::DragValue::new(&mut app.state.gui.preview_rows).range(1..=100).suffix(" rows"))
            .changed();
        ui.checkbox(&mut app.state.gui.show_grid, "Grid");
        if let Some(ds) = app.session.dataset() {
            ui.weak(format!("{} row(s) × {} column(s)", ds.len(), ds.width()));
        }
    });
    if rows_changed {
        logd!("UI: preview_rows → {}", app.state.gui.preview_rows);
        app.refresh_preview();
    }

    if app.session.dataset().is_none() {
        ui.weak("Nothing scraped yet.");
        return;
    }

    if app.state.gui.show_grid {
        data_table::draw(ui, app);
        return;
    }

    egui::ScrollArea::both()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(&mut app.preview_text.as_str())
                    .font(egui::TextStyle::Monospace)
                    .desired_width(f32::INFINITY),
            );
        });
}
