// src/gui/components/input_form.rs
//
// URL + selector fields. Edits go straight into options.scrape.

use eframe::egui;
use crate::gui::app::App;

const FIELD_W: f32 = 600.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let scrape = &mut app.state.options.scrape;

    egui::Grid::new("input_form")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            ui.label("URL:");
            ui.add(
                egui::TextEdit::singleline(&mut scrape.url)
                    .hint_text("https://example.com/page")
                    .desired_width(FIELD_W),
            );
            ui.end_row();

            ui.label("CSS Selector (for table):");
            ui.add(
                egui::TextEdit::singleline(&mut scrape.selector)
                    .hint_text("table.wikitable")
                    .font(egui::TextStyle::Monospace)
                    .desired_width(FIELD_W),
            );
            ui.end_row();
        });
}
