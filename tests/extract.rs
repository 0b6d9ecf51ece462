// tests/extract.rs
use pretty_assertions::assert_eq;
use table_scrape::{ErrorKind, NoDataReason, ScrapeError, extract::extract};

fn v(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

#[test]
fn short_rows_are_padded() {
    let markup = r#"<table id="people">
        <tr><th>Name</th><th>Age</th></tr>
        <tr><td>Alice</td><td>30</td></tr>
        <tr><td>Bob</td></tr>
    </table>"#;
    let ds = extract(markup, "#people").unwrap();
    assert_eq!(ds.headers(), v(&["Name", "Age"]).as_slice());
    assert_eq!(ds.rows(), &[v(&["Alice", "30"]), v(&["Bob", ""])]);
}

#[test]
fn long_rows_are_truncated() {
    let markup = "<table><tr><th>A</th><th>B</th></tr><tr><td>x</td><td>y</td><td>z</td></tr></table>";
    let ds = extract(markup, "table").unwrap();
    assert_eq!(ds.rows(), &[v(&["x", "y"])]);
}

#[test]
fn every_row_matches_header_width() {
    let markup = r#"<table>
        <tr><th>a</th><th>b</th><th>c</th></tr>
        <tr><td>1</td></tr>
        <tr><td>1</td><td>2</td><td>3</td><td>4</td><td>5</td></tr>
        <tr><td>1</td><td>2</td></tr>
        <tr><td>1</td><td>2</td><td>3</td></tr>
    </table>"#;
    let ds = extract(markup, "table").unwrap();
    assert_eq!(ds.len(), 4);
    assert!(ds.rows().iter().all(|r| r.len() == ds.width()));
}

#[test]
fn rows_without_data_cells_are_skipped_and_order_kept() {
    let markup = r#"<table>
        <tr><th>N</th></tr>
        <tr><td>first</td></tr>
        <tr></tr>
        <tr><td>second</td></tr>
        <tr><th>only a header cell</th></tr>
        <tr><td>third</td></tr>
    </table>"#;
    let ds = extract(markup, "table").unwrap();
    let col: Vec<&str> = ds.rows().iter().map(|r| r[0].as_str()).collect();
    assert_eq!(col, ["first", "second", "third"]);
}

#[test]
fn cell_text_is_trimmed_and_flattened_from_children() {
    let markup = r#"<table>
        <tr><th>  Team </th><th>Pts</th></tr>
        <tr><td>  <a href="/t/1">Alpha <b>FC</b></a>  </td><td> 12 </td></tr>
    </table>"#;
    let ds = extract(markup, "table").unwrap();
    assert_eq!(ds.headers(), v(&["Team", "Pts"]).as_slice());
    assert_eq!(ds.rows(), &[v(&["Alpha FC", "12"])]);
}

#[test]
fn headers_come_from_every_th_and_first_row_is_always_dropped() {
    // Row-header cells join the header list; the first row goes even though it holds data.
    let markup = r#"<table>
        <tr><td>dropped</td><td>row</td></tr>
        <tr><th>Row 1</th><td>a</td><td>b</td></tr>
        <tr><th>Row 2</th><td>c</td></tr>
    </table>"#;
    let ds = extract(markup, "table").unwrap();
    assert_eq!(ds.headers(), v(&["Row 1", "Row 2"]).as_slice());
    assert_eq!(ds.rows(), &[v(&["a", "b"]), v(&["c", ""])]);
}

#[test]
fn thead_row_is_the_dropped_row() {
    let markup = r#"<table class="wikitable">
        <thead><tr><th>City</th><th>Pop.</th></tr></thead>
        <tbody>
            <tr><td>Oslo</td><td>709,037</td></tr>
            <tr><td>Bergen</td><td>291,940</td></tr>
        </tbody>
    </table>"#;
    let ds = extract(markup, "table.wikitable").unwrap();
    assert_eq!(ds.rows(), &[v(&["Oslo", "709,037"]), v(&["Bergen", "291,940"])]);
}

#[test]
fn first_match_wins() {
    let markup = r#"
        <table class="t"><tr><th>First</th></tr><tr><td>1</td></tr></table>
        <table class="t"><tr><th>Second</th></tr><tr><td>2</td></tr></table>"#;
    let ds = extract(markup, "table.t").unwrap();
    assert_eq!(ds.headers(), v(&["First"]).as_slice());
}

#[test]
fn unmatched_selector_is_selector_not_found() {
    let err = extract("<table><tr><th>A</th></tr></table>", "#missing").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SelectorNotFound);
    assert!(err.to_string().contains("#missing"));
}

#[test]
fn element_without_header_cells_is_no_headers() {
    let markup = r#"<div id="box"><p>just text</p></div>"#;
    let err = extract(markup, "#box").unwrap_err();
    assert!(matches!(err, ScrapeError::NoHeaders));
    assert_eq!(err.to_string(), "No table found with the given CSS selector");

    let markup = "<table id='t'><tr><td>1</td></tr><tr><td>2</td></tr></table>";
    assert_eq!(extract(markup, "#t").unwrap_err().kind(), ErrorKind::NoHeaders);
}

#[test]
fn headers_without_rows_is_no_data() {
    let only_header = "<table><tr><th>A</th><th>B</th></tr></table>";
    let err = extract(only_header, "table").unwrap_err();
    assert!(matches!(err, ScrapeError::NoData(NoDataReason::EmptyTable)));
    assert_eq!(err.to_string(), "No data found in the table");

    let only_blank_rows = "<table><tr><th>A</th></tr><tr></tr><tr><th>B</th></tr></table>";
    assert_eq!(extract(only_blank_rows, "table").unwrap_err().kind(), ErrorKind::NoData);
}

#[test]
fn malformed_selector_is_its_own_error() {
    let err = extract("<table></table>", "table[").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidSelector);
}
