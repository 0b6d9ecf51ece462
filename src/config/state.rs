// src/config/state.rs
use super::consts::PREVIEW_ROWS;
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Rows rendered in the preview pane
    pub preview_rows: usize,

    /// Preview pane → grid instead of aligned text
    pub show_grid: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self { preview_rows: PREVIEW_ROWS, show_grid: false }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
