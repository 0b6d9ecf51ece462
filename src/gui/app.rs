// src/gui/app.rs
use eframe::egui;

use crate::{
    config::{settings, state::AppState},
    core::net::HttpFetcher,
    error::{Result, ScrapeError},
    session::Session,
};

use super::components;

pub const WINDOW_TITLE: &str = "Table Web Scraper";

pub fn run(options: eframe::NativeOptions) -> eframe::Result<()> {
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| {
            let app: Box<dyn eframe::App> = Box::new(App::new(AppState::default())?);
            Ok(app)
        }),
    )
}

/// Modal message shown over the main window until dismissed.
pub struct Dialog {
    pub title: String,
    pub message: String,
    pub is_error: bool,
}

impl Dialog {
    pub fn info(title: &str, message: impl Into<String>) -> Self {
        Self { title: s!(title), message: message.into(), is_error: false }
    }
    pub fn error(e: &ScrapeError) -> Self {
        Self { title: s!(e.title()), message: e.to_string(), is_error: true }
    }
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    pub session: Session,
    pub fetcher: HttpFetcher,

    // rendered preview of the current dataset
    pub preview_text: String,

    pub status: String,
    pub dialog: Option<Dialog>,
}

impl App {
    pub fn new(mut state: AppState) -> Result<Self> {
        state.options = settings::load();
        logf!(
            "Init: url={:?} selector={:?} format={:?}",
            state.options.scrape.url, state.options.scrape.selector, state.options.export.format
        );

        Ok(Self {
            state,
            session: Session::new(),
            fetcher: HttpFetcher::new()?,
            preview_text: String::new(),
            status: s!("Idle"),
            dialog: None,
        })
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Re-render the text preview from the current dataset.
    pub fn refresh_preview(&mut self) {
        self.preview_text = match self.session.dataset() {
            Some(ds) => ds.preview(self.state.gui.preview_rows).to_string(),
            None => String::new(),
        };
    }

    pub fn save_settings(&self) {
        if let Err(e) = settings::save(&self.state.options) {
            loge!("Settings: save failed: {e}");
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(format!("Status: {}", self.status));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::input_form::draw(ui, self);

            ui.separator();

            components::action_buttons::draw(ui, self);

            ui.separator();

            components::preview::draw(ui, self);
        });

        components::dialog::draw(ctx, self);
    }
}
