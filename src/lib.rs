// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;

pub mod csv;
pub mod dataset;
pub mod extract;
pub mod file;
pub mod progress;
pub mod scrape;
pub mod session;

#[cfg(feature = "cli")]
pub mod cli;
pub mod gui;

pub use crate::core::{Fetch, HttpFetcher};
pub use dataset::{Dataset, Preview};
pub use error::{ErrorKind, NoDataReason, Result, ScrapeError};
pub use session::Session;
