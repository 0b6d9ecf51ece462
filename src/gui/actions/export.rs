// src/gui/actions/export.rs
use crate::gui::app::{App, Dialog};

pub fn export(app: &mut App) {
    let format = app.state.options.export.format;
    let path = app.state.options.export.resolve_path(app.session.source());

    match app.session.export(&path, format) {
        Ok(written) => {
            app.status(format!("Saved → {}", written.display()));
            app.dialog = Some(Dialog::info(
                "Success",
                format!("{} file has been saved successfully!\n{}", format.label(), written.display()),
            ));
            app.save_settings();
        }
        Err(e) => {
            app.status(format!("Export error: {e}"));
            app.dialog = Some(Dialog::error(&e));
        }
    }
}
