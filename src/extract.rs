// src/extract.rs
//! # Table extraction
//!
//! Turns one located element into a [`Dataset`].
//!
//! ## Policy
//! - **Headers**: every `th` under the element, in document order, whatever row
//!   it sits in. No headers ⇒ [`ScrapeError::NoHeaders`] ("no table found").
//! - **First row dropped**: the first `tr` is always treated as the header row and
//!   skipped, even when the headers came from somewhere else.
//! - **Data cells**: only `td` counts. A row with no `td` is skipped outright.
//! - **Reconciliation**: short rows are right-padded with `""`, long rows are cut
//!   to the header width. Irregular tables are forced rectangular, silently.
//! - **Order**: rows keep document order. No dedup, no sorting.
//! - **Empty result**: headers but zero kept rows ⇒ [`NoDataReason::EmptyTable`].
//!
//! Extraction is all-or-nothing: a `Dataset` is only returned once every row is in.

use std::cmp::Ordering;

use scraper::ElementRef;

use crate::{
    core::html,
    dataset::Dataset,
    error::{NoDataReason, Result, ScrapeError},
};

/// Row bookkeeping for the log line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExtractStats {
    pub kept: usize,
    pub skipped_empty: usize,
    pub padded: usize,
    pub truncated: usize,
}

/// Pad with empty cells or cut on the right so `row.len() == width`.
pub fn reconcile(mut row: Vec<String>, width: usize) -> Vec<String> {
    row.resize(width, String::new());
    row
}

/// Locate `selector` in `markup` and extract it.
pub fn extract(markup: &str, selector: &str) -> Result<Dataset> {
    let doc = html::parse_document(markup);
    let table = html::locate(&doc, selector)?;
    extract_table(table)
}

pub fn extract_table(table: ElementRef<'_>) -> Result<Dataset> {
    extract_table_with_stats(table).map(|(ds, _)| ds)
}

pub fn extract_table_with_stats(table: ElementRef<'_>) -> Result<(Dataset, ExtractStats)> {
    let headers: Vec<String> = html::header_cells(table).map(html::cell_text).collect();
    if headers.is_empty() {
        loge!("Extract: <{}> has no header cells", table.value().name());
        return Err(ScrapeError::NoHeaders);
    }
    let width = headers.len();
    logd!("Extract: headers={width} {headers:?}");

    let mut ds = Dataset::new(headers);
    let mut stats = ExtractStats::default();

    for row in html::rows(table).skip(1) {
        let raw: Vec<String> = html::data_cells(row).map(html::cell_text).collect();
        if raw.is_empty() {
            stats.skipped_empty += 1;
            continue;
        }
        match raw.len().cmp(&width) {
            Ordering::Less => stats.padded += 1,
            Ordering::Greater => stats.truncated += 1,
            Ordering::Equal => {}
        }
        ds.push_row(raw);
        stats.kept += 1;
    }

    logf!(
        "Extract: rows={} skipped={} padded={} truncated={}",
        stats.kept, stats.skipped_empty, stats.padded, stats.truncated
    );

    if ds.is_empty() {
        return Err(ScrapeError::NoData(NoDataReason::EmptyTable));
    }
    Ok((ds, stats))
}
