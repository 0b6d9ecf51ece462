// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use url::Url;

use crate::{
    config::{
        consts::{DEFAULT_FILE, DEFAULT_OUT_DIR},
        options::ExportFormat,
    },
    core::sanitize::sanitize_file_stem,
    csv::write_records,
    dataset::Dataset,
    error::{Result, ScrapeError},
};

/// Write `ds` to `path` (header record first). Creates missing parent directories.
/// Returns the path written to.
pub fn export_dataset(ds: &Dataset, path: &Path, format: ExportFormat) -> Result<PathBuf> {
    logf!(
        "Export: Begin rows={} cols={} format={:?} → {}",
        ds.len(), ds.width(), format, path.display()
    );

    write_file(ds, path, format).map_err(|e| {
        loge!("Export: Error {}: {e}", path.display());
        ScrapeError::io_write(path, e)
    })?;

    logf!("Export: OK {}", path.display());
    Ok(path.to_path_buf())
}

fn write_file(ds: &Dataset, path: &Path, format: ExportFormat) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let file = File::create(path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    write_records(&mut out, ds.headers(), ds.rows(), format.delim())?;
    out.flush()
}

/// `<host>.<ext>`, or `table.<ext>` when there is no usable host.
pub fn default_file_name(url: Option<&Url>, format: ExportFormat) -> String {
    let host = url.and_then(|u| u.host_str()).unwrap_or("");
    let stem = sanitize_file_stem(host, DEFAULT_FILE);
    join!(&stem, ".", format.ext())
}

/// Map the user's output text to a file path.
/// - empty → `out/<default_filename>`
/// - ends with a separator, or names an existing directory → `<dir>/<default_filename>`
/// - anything else is taken as the file path itself
pub fn resolve_out_path(user_o: &str, default_filename: &str) -> PathBuf {
    let user_o = user_o.trim();
    if user_o.is_empty() {
        return PathBuf::from(DEFAULT_OUT_DIR).join(default_filename);
    }
    let p = PathBuf::from(normalize_separators(user_o));
    if looks_like_dir_hint(user_o) || p.is_dir() {
        p.join(default_filename)
    } else {
        p
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &str) -> bool {
    p.ends_with('/') || p.ends_with('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_name_follows_host_and_format() {
        let url = Url::parse("https://en.wikipedia.org/wiki/List").unwrap();
        assert_eq!(default_file_name(Some(&url), ExportFormat::Csv), "en_wikipedia_org.csv");
        assert_eq!(default_file_name(None, ExportFormat::Tsv), "table.tsv");
    }

    #[test]
    fn empty_output_goes_to_default_dir() {
        assert_eq!(
            resolve_out_path("  ", "x.csv"),
            PathBuf::from(DEFAULT_OUT_DIR).join("x.csv")
        );
    }

    #[test]
    fn trailing_separator_means_directory() {
        let p = resolve_out_path("exports/", "x.csv");
        assert_eq!(p, PathBuf::from("exports").join("x.csv"));
    }

    #[test]
    fn plain_path_is_kept() {
        let p = resolve_out_path("exports/mine.csv", "x.csv");
        assert_eq!(p, PathBuf::from(normalize_separators("exports/mine.csv")));
    }
}
