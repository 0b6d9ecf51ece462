// src/config/options.rs
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
    core::net,
    error::{Result, ScrapeError},
    file,
};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/// What to scrape: one page, one selector.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeOptions {
    pub url: String,
    pub selector: String,
}

impl ScrapeOptions {
    pub fn new(url: impl Into<String>, selector: impl Into<String>) -> Self {
        Self { url: url.into(), selector: selector.into() }
    }

    /// Check both fields before any network traffic.
    /// Returns the parsed URL and the trimmed selector.
    pub fn validate(&self) -> Result<(Url, &str)> {
        let url = self.url.trim();
        let selector = self.selector.trim();
        if url.is_empty() || selector.is_empty() {
            return Err(ScrapeError::InvalidInput(s!("Please fill all fields")));
        }
        Ok((net::parse_url(url)?, selector))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
    pub fn label(&self) -> &'static str {
        match self { ExportFormat::Csv => "CSV", ExportFormat::Tsv => "TSV" }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// Raw user text; empty means "derive from the page URL".
    pub out_path: String,
}

impl ExportOptions {
    /// Final file path for an export of the page at `url`.
    pub fn resolve_path(&self, url: Option<&Url>) -> PathBuf {
        let default_name = file::default_file_name(url, self.format);
        file::resolve_out_path(&self.out_path, &default_name)
    }
}
