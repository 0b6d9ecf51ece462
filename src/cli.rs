// src/cli.rs
use std::io::{self, Write};

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};

use crate::{
    config::{
        consts::PREVIEW_ROWS,
        options::{ExportFormat, ExportOptions, ScrapeOptions},
    },
    core::net::HttpFetcher,
    progress::{Progress, Step},
    session::Session,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Csv,
    Tsv,
}

impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f { FormatArg::Csv => ExportFormat::Csv, FormatArg::Tsv => ExportFormat::Tsv }
    }
}

/// Extract one HTML table from a web page into CSV.
#[derive(Debug, Parser)]
#[command(name = "table_scrape", version, about)]
pub struct Args {
    /// Page to fetch (http or https)
    #[arg(short, long)]
    pub url: String,

    /// CSS selector for the table; the first match is used
    #[arg(short, long)]
    pub selector: String,

    /// Output file, or a directory ending in '/' (default: out/<host>.csv)
    #[arg(short, long, default_value = "")]
    pub out: String,

    #[arg(long, value_enum, default_value_t = FormatArg::Csv)]
    pub format: FormatArg,

    /// Rows to show in the preview (0 disables it)
    #[arg(long, default_value_t = PREVIEW_ROWS)]
    pub preview: usize,

    /// Print the data to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}

struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn step_done(&mut self, step: Step) {
        logd!("CLI: step done {step:?}");
    }
}

pub fn run() -> Result<()> {
    run_with(Args::parse())
}

pub fn run_with(args: Args) -> Result<()> {
    let mut out = io::stdout().lock();
    run_to(args, &mut out)
}

/// Same as [`run_with`], with stdout output (preview, data, "Wrote …") sent to `out`.
/// Progress and counts still go to stderr.
pub fn run_to<W: Write>(args: Args, out: &mut W) -> Result<()> {
    let scrape = ScrapeOptions::new(args.url, args.selector);
    let export = ExportOptions { format: args.format.into(), out_path: args.out };

    let fetcher = HttpFetcher::new()?;
    let mut session = Session::new();
    let ds = session
        .scrape(&fetcher, &scrape, Some(&mut CliProgress))
        .wrap_err("Scrape failed")?;
    eprintln!("Scraped {} row(s) × {} column(s)", ds.len(), ds.width());

    if args.stdout {
        out.write_all(ds.to_delimited(export.format).as_bytes())?;
        out.flush()?;
        return Ok(());
    }

    if args.preview > 0 {
        writeln!(out, "{}", ds.preview(args.preview))?;
    }

    let path = export.resolve_path(session.source());
    let written = session
        .export(&path, export.format)
        .wrap_err("Export failed")?;
    writeln!(out, "Wrote {}", written.display())?;
    Ok(())
}
