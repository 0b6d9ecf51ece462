// src/session.rs
//
// The caller-owned "current dataset". One scrape/export cycle at a time.
//
// - scrape(): every attempt starts from an empty session; success stores the
//   new Dataset (replacing, never merging), failure leaves the session empty.
// - export(): only valid after a successful scrape since the last reset.

use std::path::{Path, PathBuf};

use url::Url;

use crate::{
    config::options::{ExportFormat, ScrapeOptions},
    core::net::Fetch,
    dataset::Dataset,
    error::{NoDataReason, Result, ScrapeError},
    progress::Progress,
    scrape::{Scraped, scrape_table},
};

#[derive(Debug, Default)]
pub struct Session {
    current: Option<Scraped>,
}

impl Session {
    pub fn new() -> Self { Self::default() }

    pub fn scrape(
        &mut self,
        fetcher: &dyn Fetch,
        opts: &ScrapeOptions,
        progress: Option<&mut dyn Progress>,
    ) -> Result<&Dataset> {
        self.reset();
        let scraped = self.current.insert(scrape_table(fetcher, opts, progress)?);
        Ok(&scraped.dataset)
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.current.as_ref().map(|s| &s.dataset)
    }

    /// URL the current dataset came from.
    pub fn source(&self) -> Option<&Url> {
        self.current.as_ref().map(|s| &s.source)
    }

    /// The current dataset, or "No data to save".
    pub fn require_dataset(&self) -> Result<&Dataset> {
        self.dataset()
            .ok_or(ScrapeError::NoData(NoDataReason::NothingToSave))
    }

    pub fn can_export(&self) -> bool {
        self.current.is_some()
    }

    pub fn export(&self, path: &Path, format: ExportFormat) -> Result<PathBuf> {
        let ds = self.require_dataset().inspect_err(|_| {
            logd!("Export: Clicked, but there's nothing to export");
        })?;
        ds.export_as(path, format)
    }

    pub fn reset(&mut self) {
        self.current = None;
    }
}
