// src/gui/components/dialog.rs
use eframe::egui;
use crate::gui::app::App;

pub fn draw(ctx: &egui::Context, app: &mut App) {
    let Some(dialog) = &app.dialog else { return };

    let mut close = false;
    egui::Window::new(&dialog.title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            if dialog.is_error {
                ui.colored_label(ui.visuals().error_fg_color, &dialog.message);
            } else {
                ui.label(&dialog.message);
            }
            ui.add_space(6.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    close = true;
                }
            });
        });

    if close {
        app.dialog = None;
    }
}
