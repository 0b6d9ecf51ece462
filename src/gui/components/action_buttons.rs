// src/gui/components/action_buttons.rs

use eframe::egui;
use crate::{
    config::options::ExportFormat,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // --- Format + Output field ---
    {
        let export = &mut app.state.options.export;
        let prev_fmt = export.format;

        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");

            ui.separator();

            ui.label("Output:");
            if ui
                .add(
                    egui::TextEdit::singleline(&mut export.out_path)
                        .hint_text("out/<host>.csv")
                        .font(egui::TextStyle::Monospace),
                )
                .changed()
            {
                logd!("UI: out_path → {:?}", export.out_path);
            }
        });

        if export.format != prev_fmt {
            logf!("UI: Export format → {:?}", export.format);
        }
    }

    // --- Actions: Scrape / Download / Copy / Exit ---
    let can_export = app.session.can_export();
    let download_label = format!("Download {}", app.state.options.export.format.label());

    ui.horizontal(|ui| {
        let red = egui::Color32::from_rgb(220, 30, 30);
        let black = egui::Color32::BLACK;
        let button_scrape = ui.add(
            egui::Button::new(egui::RichText::new("Scrape").color(black).strong()).fill(red),
        );
        if button_scrape.clicked() {
            actions::scrape(app);
        }

        if ui
            .add_enabled(can_export, egui::Button::new(download_label))
            .on_disabled_hover_text("Scrape a table first")
            .clicked()
        {
            actions::export(app);
        }

        if ui.add_enabled(can_export, egui::Button::new("Copy")).clicked() {
            actions::copy(app, ui.ctx());
        }

        if ui.button("Exit").clicked() {
            logf!("UI: Exit");
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}
