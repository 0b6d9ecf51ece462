// src/gui/actions/scrape.rs
use crate::gui::{
    app::{App, Dialog},
    progress::GuiProgress,
};

pub fn scrape(app: &mut App) {
    let mut prog = GuiProgress::new(&mut app.status);
    let res = app
        .session
        .scrape(&app.fetcher, &app.state.options.scrape, Some(&mut prog));

    match res {
        Ok(ds) => {
            let msg = format!("Ready: {} row(s) × {} column(s)", ds.len(), ds.width());
            app.refresh_preview();
            app.status(msg);
            app.dialog = Some(Dialog::info("Success", "Data scraped successfully"));
            app.save_settings();
        }
        Err(e) => {
            app.preview_text.clear();
            app.status(format!("Error: {e}"));
            app.dialog = Some(Dialog::error(&e));
        }
    }
}
