// src/dataset.rs
//
// The extracted table: one header list plus rows that are always exactly as
// wide as the header list. Rows only get in through `push_row`, which
// reconciles them, so rectangularity holds by construction.

use std::{
    borrow::Cow,
    fmt,
    path::{Path, PathBuf},
};

use unicode_width::UnicodeWidthStr;

use crate::{
    config::options::ExportFormat,
    csv,
    error::Result,
    extract::reconcile,
    file,
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Empty dataset with the given columns.
    pub fn new(headers: Vec<String>) -> Self {
        Self { headers, rows: Vec::new() }
    }

    pub fn headers(&self) -> &[String] { &self.headers }
    pub fn rows(&self) -> &[Vec<String>] { &self.rows }
    pub fn row(&self, i: usize) -> Option<&[String]> { self.rows.get(i).map(|r| r.as_slice()) }

    /// Number of columns.
    pub fn width(&self) -> usize { self.headers.len() }
    /// Number of data rows.
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Append one row, padded or truncated to the header width.
    pub fn push_row(&mut self, row: Vec<String>) {
        let width = self.width();
        self.rows.push(reconcile(row, width));
    }

    /// Header plus the first `n` rows as aligned text. Borrows; never mutates.
    pub fn preview(&self, n: usize) -> Preview<'_> {
        Preview::new(self, n)
    }

    /// Write as CSV: header record first, no index column.
    pub fn export(&self, path: &Path) -> Result<PathBuf> {
        self.export_as(path, ExportFormat::Csv)
    }

    pub fn export_as(&self, path: &Path, format: ExportFormat) -> Result<PathBuf> {
        file::export_dataset(self, path, format)
    }

    /// The same bytes `export_as` would write, as a String.
    pub fn to_delimited(&self, format: ExportFormat) -> String {
        csv::records_to_string(&self.headers, &self.rows, format.delim())
    }
}

/* ---------------- Preview ---------------- */

/// Bounded, restartable text rendering of a dataset's head.
/// Call [`Preview::lines`] as often as needed; each call starts over.
#[derive(Clone, Debug)]
pub struct Preview<'a> {
    ds: &'a Dataset,
    shown: usize,
    index_w: usize,
    widths: Vec<usize>,
}

// Line breaks and tabs inside a cell would wreck the alignment.
fn flat(cell: &str) -> Cow<'_, str> {
    if cell.contains(['\n', '\r', '\t']) {
        Cow::Owned(cell.replace(['\n', '\r', '\t'], " "))
    } else {
        Cow::Borrowed(cell)
    }
}

impl<'a> Preview<'a> {
    fn new(ds: &'a Dataset, n: usize) -> Self {
        let shown = n.min(ds.len());

        let mut widths: Vec<usize> = ds.headers.iter().map(|h| flat(h).width()).collect();
        for row in &ds.rows[..shown] {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(flat(cell).width());
            }
        }
        let index_w = if shown == 0 { 0 } else { (shown - 1).to_string().len() };

        Self { ds, shown, index_w, widths }
    }

    /// Rows included (≤ requested).
    pub fn shown(&self) -> usize { self.shown }

    /// Rows in the whole dataset.
    pub fn total(&self) -> usize { self.ds.len() }

    /// Header line, then one line per shown row, prefixed with its 0-based index.
    pub fn lines(&self) -> impl Iterator<Item = String> {
        let header = self.line("", &self.ds.headers);
        let body = self.ds.rows[..self.shown]
            .iter()
            .enumerate()
            .map(|(i, row)| self.line(&i.to_string(), row));
        std::iter::once(header).chain(body)
    }

    fn line(&self, index: &str, cells: &[String]) -> String {
        let mut out = format!("{index:>w$}", w = self.index_w);
        for (cell, &w) in cells.iter().zip(&self.widths) {
            // Pad by terminal columns, not chars: CJK cells are two columns wide.
            let cell = flat(cell);
            out.push_str("  ");
            out.push_str(&cell);
            out.extend(std::iter::repeat_n(' ', w.saturating_sub(cell.width())));
        }
        out.trim_end().to_string()
    }
}

impl fmt::Display for Preview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines().enumerate() {
            if i > 0 { writeln!(f)?; }
            f.write_str(&line)?;
        }
        Ok(())
    }
}
