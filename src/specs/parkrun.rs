// src/specs/parkrun.rs
// Saved parkrun "latest results" page. The site blocks scrapers, so the page
// is downloaded by hand and read from disk.

use scraper::Html;

use crate::core::html::{cell_texts, select_all};
use crate::error::ParseError;

const RESULT_ROWS: &str = "table#results > tbody > tr";

pub const HEADERS: [&str; 9] = [
    "Pos", "Park Runner", "Time", "Age Cat", "Age Grade",
    "Gender", "Gender Pos", "Club", "Total Runs",
];

// Cell 8 (notes) is not exported.
const TOTAL_RUNS_CELL: usize = 9;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParkrunRow {
    pub pos: String,
    pub runner: String,
    pub time: String,
    pub age_cat: String,
    pub age_grade: String,
    pub gender: String,
    pub gender_pos: String,
    pub club: String,
    pub total_runs: String,
}

impl ParkrunRow {
    fn from_cells(cells: &[String]) -> Self {
        let cell = |i: usize| cells.get(i).cloned().unwrap_or_default();
        Self {
            pos: cell(0),
            runner: cell(1),
            time: cell(2),
            age_cat: cell(3),
            age_grade: cell(4),
            gender: cell(5),
            gender_pos: cell(6),
            club: cell(7),
            total_runs: cell(TOTAL_RUNS_CELL),
        }
    }

    /// One export row in [`HEADERS`] order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.pos.clone(),
            self.runner.clone(),
            self.time.clone(),
            self.age_cat.clone(),
            self.age_grade.clone(),
            self.gender.clone(),
            self.gender_pos.clone(),
            self.club.clone(),
            self.total_runs.clone(),
        ]
    }
}

/// Every row of the results table body. Missing cells come back empty.
pub fn parse_results_page(html: &str) -> Result<Vec<ParkrunRow>, ParseError> {
    let doc = Html::parse_document(html);
    Ok(select_all(&doc, RESULT_ROWS)?
        .into_iter()
        .map(cell_texts)
        .filter(|cells| !cells.is_empty())
        .map(|cells| ParkrunRow::from_cells(&cells))
        .collect())
}
