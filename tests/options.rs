// tests/options.rs
use std::{fs, path::PathBuf};

use pretty_assertions::assert_eq;
use tempfile::tempdir;
use url::Url;

use table_scrape::config::{
    consts::DEFAULT_OUT_DIR,
    options::{AppOptions, ExportFormat, ExportOptions, ScrapeOptions},
    settings,
};

fn page() -> Url {
    Url::parse("https://stats.example.org/season/2024").unwrap()
}

#[test]
fn empty_output_uses_host_named_file_in_default_dir() {
    let export = ExportOptions::default();
    assert_eq!(
        export.resolve_path(Some(&page())),
        PathBuf::from(DEFAULT_OUT_DIR).join("stats_example_org.csv")
    );

    let tsv = ExportOptions { format: ExportFormat::Tsv, ..ExportOptions::default() };
    assert_eq!(
        tsv.resolve_path(None),
        PathBuf::from(DEFAULT_OUT_DIR).join("table.tsv")
    );
}

#[test]
fn existing_directory_gets_the_default_file_name() {
    let dir = tempdir().unwrap();
    let export = ExportOptions {
        out_path: dir.path().to_string_lossy().into_owned(),
        ..ExportOptions::default()
    };
    assert_eq!(
        export.resolve_path(Some(&page())),
        dir.path().join("stats_example_org.csv")
    );
}

#[test]
fn explicit_file_name_is_kept_whatever_the_format() {
    let dir = tempdir().unwrap();
    let wanted = dir.path().join("mine.txt");
    let export = ExportOptions {
        format: ExportFormat::Tsv,
        out_path: wanted.to_string_lossy().into_owned(),
    };
    assert_eq!(export.resolve_path(Some(&page())), wanted);
}

#[test]
fn settings_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".store").join("settings.json");

    let opts = AppOptions {
        scrape: ScrapeOptions::new("https://example.com/a", "table#main"),
        export: ExportOptions { format: ExportFormat::Tsv, out_path: "exports/".into() },
    };
    settings::save_to(&path, &opts).unwrap();
    assert_eq!(settings::load_from(&path), opts);
}

#[test]
fn missing_or_corrupt_settings_fall_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    assert_eq!(settings::load_from(&path), AppOptions::default());

    fs::write(&path, "{ not json").unwrap();
    assert_eq!(settings::load_from(&path), AppOptions::default());
}

#[test]
fn partial_settings_fill_in_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "scrape": { "url": "https://example.com" } }"#).unwrap();

    let opts = settings::load_from(&path);
    assert_eq!(opts.scrape.url, "https://example.com");
    assert_eq!(opts.scrape.selector, "");
    assert_eq!(opts.export, ExportOptions::default());
}
