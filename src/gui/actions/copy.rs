// src/gui/actions/copy.rs
use eframe::egui;
use crate::gui::app::App;

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let format = app.state.options.export.format;

    let Some(ds) = app.session.dataset() else {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    };

    logf!("Copy: rows={} cols={} format={:?}", ds.len(), ds.width(), format);
    ui_ctx.copy_text(ds.to_delimited(format));
    app.status("Copied to clipboard");
}
