// src/config/consts.rs

// Net config
pub const USER_AGENT: &str = concat!("table_scrape/", env!("CARGO_PKG_VERSION"));

// Local store (log + remembered inputs)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const SETTINGS_FILE: &str = "settings.json";

// Preview
pub const PREVIEW_ROWS: usize = 5;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "table";

// Window
pub const WINDOW_W: f32 = 800.0;
pub const WINDOW_H: f32 = 450.0;
