// src/csv.rs
use std::io::Write;

use csv::{ReaderBuilder, WriterBuilder};

use crate::error::Result;
use crate::store::Dataset;

/* ---------------- Writing ---------------- */

/// Write header + rows. Output is UTF-8; fields are quoted only when needed.
pub fn write_table<W: Write>(w: W, data: &Dataset, delim: u8) -> Result<()> {
    let mut out = WriterBuilder::new().delimiter(delim).from_writer(w);
    out.write_record(&data.headers)?;
    for row in &data.rows {
        out.write_record(row)?;
    }
    out.flush()?;
    Ok(())
}

/// Same as [`write_table`], into a `String`.
pub fn to_export_string(data: &Dataset, delim: u8) -> Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    write_table(&mut buf, data, delim)?;
    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}

/* ---------------- Parsing ---------------- */

/// Read a table written by [`write_table`]; the first record is the header.
pub fn read_table(text: &str, delim: u8) -> Result<Dataset> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(delim)
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = rdr.headers()?.iter().map(|h| s!(h)).collect();
    let mut rows = Vec::new();
    for record in rdr.records() {
        rows.push(record?.iter().map(|f| s!(f)).collect());
    }
    Ok(Dataset { headers, rows })
}
