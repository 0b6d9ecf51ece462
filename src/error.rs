// src/error.rs
//! Error taxonomy for the scrape → extract → export cycle.
//!
//! Every failure a user can hit maps to exactly one [`ScrapeError`] variant, and
//! every variant maps to an [`ErrorKind`] so front ends can branch on the kind
//! without matching on payloads.

use std::fmt;
use std::io;
use std::path::PathBuf;

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;

/// Coarse, payload-free classification of a [`ScrapeError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    Network,
    InvalidSelector,
    SelectorNotFound,
    NoHeaders,
    NoData,
    IoWrite,
}

/// Why there is nothing to hand out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoDataReason {
    /// The table had headers but no usable data rows.
    EmptyTable,
    /// Export was requested before any successful extraction.
    NothingToSave,
}

impl fmt::Display for NoDataReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoDataReason::EmptyTable => f.write_str("No data found in the table"),
            NoDataReason::NothingToSave => f.write_str("No data to save"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    /// Missing or malformed URL/selector input.
    #[error("{0}")]
    InvalidInput(String),

    /// The HTTP client could not be set up.
    #[error("HTTP client setup failed: {0}")]
    Client(#[source] reqwest::Error),

    /// Transport failure or non-success HTTP status.
    #[error("HTTP error for {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The selector string is not valid CSS.
    #[error("Invalid CSS selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// Nothing in the document matches the selector.
    #[error("No element found with the given CSS selector: {selector}")]
    SelectorNotFound { selector: String },

    /// The matched element has no header cells.
    #[error("No table found with the given CSS selector")]
    NoHeaders,

    #[error("{0}")]
    NoData(NoDataReason),

    /// The export destination could not be written.
    #[error("Could not write {}: {source}", path.display())]
    IoWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScrapeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScrapeError::InvalidInput(_) => ErrorKind::InvalidInput,
            ScrapeError::Client(_) | ScrapeError::Network { .. } => ErrorKind::Network,
            ScrapeError::InvalidSelector { .. } => ErrorKind::InvalidSelector,
            ScrapeError::SelectorNotFound { .. } => ErrorKind::SelectorNotFound,
            ScrapeError::NoHeaders => ErrorKind::NoHeaders,
            ScrapeError::NoData(_) => ErrorKind::NoData,
            ScrapeError::IoWrite { .. } => ErrorKind::IoWrite,
        }
    }

    /// Short heading for message dialogs.
    pub fn title(&self) -> &'static str {
        match self.kind() {
            ErrorKind::InvalidInput => "Input Error",
            ErrorKind::Network => "Network Error",
            ErrorKind::InvalidSelector | ErrorKind::SelectorNotFound => "Selector Error",
            ErrorKind::NoHeaders => "No Headers",
            ErrorKind::NoData => "No Data",
            ErrorKind::IoWrite => "Save Error",
        }
    }

    /// HTTP status code, when the server answered with a non-success status.
    pub fn status(&self) -> Option<u16> {
        match self {
            ScrapeError::Network { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn io_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ScrapeError::IoWrite { path: path.into(), source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_data_reasons_read_differently() {
        let empty = ScrapeError::NoData(NoDataReason::EmptyTable);
        let save = ScrapeError::NoData(NoDataReason::NothingToSave);
        assert_eq!(empty.kind(), save.kind());
        assert_eq!(empty.to_string(), "No data found in the table");
        assert_eq!(save.to_string(), "No data to save");
    }

    #[test]
    fn no_headers_reads_as_no_table() {
        let e = ScrapeError::NoHeaders;
        assert_eq!(e.kind(), ErrorKind::NoHeaders);
        assert!(e.to_string().contains("No table found"));
        assert_eq!(e.status(), None);
    }

    #[test]
    fn io_write_names_the_path() {
        let e = ScrapeError::io_write("out/x.csv", io::Error::other("disk full"));
        assert_eq!(e.kind(), ErrorKind::IoWrite);
        let msg = e.to_string();
        assert!(msg.contains("x.csv"));
        assert!(msg.contains("disk full"));
        assert_eq!(e.title(), "Save Error");
    }

    #[test]
    fn selector_failures_share_a_title() {
        let bad = ScrapeError::InvalidSelector { selector: s!("##"), reason: s!("x") };
        let missing = ScrapeError::SelectorNotFound { selector: s!("#t") };
        assert_eq!(bad.title(), missing.title());
    }
}
