// src/config/settings.rs
//
// Remembered inputs between GUI sessions: last URL, selector, output path, format.
// Missing or unreadable file → defaults. Never fatal.

use std::{fs, io, path::{Path, PathBuf}};

use super::consts::{SETTINGS_FILE, STORE_DIR};
use super::options::AppOptions;

pub fn default_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(SETTINGS_FILE)
}

pub fn load() -> AppOptions {
    load_from(&default_path())
}

pub fn save(opts: &AppOptions) -> io::Result<()> {
    save_to(&default_path(), opts)
}

pub fn load_from(path: &Path) -> AppOptions {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) => {
            logd!("Settings: {} not read ({e}), using defaults", path.display());
            return AppOptions::default();
        }
    };
    match serde_json::from_str(&text) {
        Ok(opts) => opts,
        Err(e) => {
            loge!("Settings: {} is not valid ({e}), using defaults", path.display());
            AppOptions::default()
        }
    }
}

pub fn save_to(path: &Path, opts: &AppOptions) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let text = serde_json::to_string_pretty(opts)?;
    fs::write(path, text)
}
