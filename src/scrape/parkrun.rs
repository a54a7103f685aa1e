// src/scrape/parkrun.rs
use std::{fs, path::Path};

use crate::{
    error::Result,
    specs::parkrun::{parse_results_page, ParkrunRow, HEADERS},
    store::Dataset,
};

/// Read a hand-saved parkrun results page into an export table.
pub fn convert_parkrun(page: &Path) -> Result<Dataset> {
    let html = fs::read_to_string(page)?;
    let rows = parse_results_page(&html)?;
    logf!("Parkrun page {}: {} rows", page.display(), rows.len());

    let mut data = Dataset::new(&HEADERS);
    data.rows = rows.iter().map(ParkrunRow::to_row).collect();
    Ok(data)
}
