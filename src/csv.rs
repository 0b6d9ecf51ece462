// src/csv.rs
//
// Delimited text in and out. Standard CSV quoting (fields containing the
// delimiter, quotes or line breaks are quoted), '\n' record terminator.

use std::io::{Read, Write};

/* ---------------- Writing ---------------- */

/// Write the header record followed by every row.
pub fn write_records<W: Write>(
    w: W,
    headers: &[String],
    rows: &[Vec<String>],
    delim: u8,
) -> csv::Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delim)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(w);

    wtr.write_record(headers)?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Same as [`write_records`], into a String (clipboard, stdout).
pub fn records_to_string(headers: &[String], rows: &[Vec<String>], delim: u8) -> String {
    let mut buf: Vec<u8> = Vec::new();
    if let Err(e) = write_records(&mut buf, headers, rows, delim) {
        loge!("CSV: serialization failed: {e}");
    }
    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

/* ---------------- Parsing ---------------- */

/// Read every record, header included, as plain strings.
pub fn read_records<R: Read>(r: R, delim: u8) -> csv::Result<Vec<Vec<String>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delim)
        .flexible(true)
        .from_reader(r);

    rdr.records()
        .map(|rec| rec.map(|r| r.iter().map(String::from).collect()))
        .collect()
}
