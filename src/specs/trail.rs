// src/specs/trail.rs
//! Per-bib result page of the trail race site.
//!
//! One page holds four views centered on the page's entrant (the selected
//! row): the overall results grid, the age-group grid, the split times, and
//! the grid of every entrant of the same gender. The gender grid is the only
//! place gender shows up at all, and only as a list of names and times.

use scraper::Html;

use crate::core::html::{cell_texts, own_text, select_all, select_first, text_of};
use crate::core::sanitize::last_parenthesized;
use crate::error::ParseError;
use crate::types::NameTime;

const RESULTS_ROWS: &str = "#ctl00_SecondaryContent_ResultsGrid tr";
const SELECTED_RESULT: &str = "#ctl00_SecondaryContent_ResultsGrid tr.selected";
const SELECTED_AGE: &str = "#ctl00_SecondaryContent_AgeGroupGrid tr.selected";
const AGE_HEADING: &str = "#ctl00_SecondaryContent_PanelAgeGroupResults > div > div > h2";
const SPLITS: &str = "#split-times > span";
const GENDER_ROWS: &str = "#ctl00_SecondaryContent_GenderGroupGrid tr";

// Split spans: label/value pairs, KOM value is the 2nd span, DD the 4th.
const KOM_SPAN: usize = 1;
const DD_SPAN: usize = 3;

/// Export column order.
pub const HEADERS: [&str; 10] = [
    "position", "bib", "name", "time", "age-group",
    "KOM", "DD", "pos-age", "pos-gender", "gender",
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrailResult {
    pub position: String,
    pub bib: String,
    pub name: String,
    pub time: String,
    pub age_group: String,
    /// King of the Mountain split
    pub kom: String,
    /// Demon Descent split
    pub dd: String,
    pub pos_age: String,
    pub pos_gender: String,
}

impl TrailResult {
    pub fn name_time(&self) -> NameTime {
        NameTime::new(&self.name, &self.time)
    }

    /// One export row in [`HEADERS`] order.
    pub fn to_row(&self, gender: &str) -> Vec<String> {
        vec![
            self.position.clone(),
            self.bib.clone(),
            self.name.clone(),
            self.time.clone(),
            self.age_group.clone(),
            self.kom.clone(),
            self.dd.clone(),
            self.pos_age.clone(),
            self.pos_gender.clone(),
            s!(gender),
        ]
    }
}

/// Everything read from one entrant page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntrantPage {
    pub result: TrailResult,
    /// `name=time` of every *other* entrant in the gender grid.
    pub same_gender: Vec<NameTime>,
}

/// One row of the overall results grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridRow {
    pub pos: String,
    pub bib: String,
    pub name: String,
    pub time: String,
}

fn is_header(cells: &[String]) -> bool {
    cells.first().is_some_and(|c| c.eq_ignore_ascii_case("pos"))
}

/// Parse the page saved for `expected_bib`.
pub fn parse_entrant_page(html: &str, expected_bib: &str) -> Result<EntrantPage, ParseError> {
    let doc = Html::parse_document(html);

    // Selected overall row: Pos | Bib | Name | Time
    let hero = cell_texts(select_first(&doc, SELECTED_RESULT)?);
    if hero.len() < 4 {
        return Err(ParseError::MissingElement(join!(SELECTED_RESULT, " td")));
    }
    let mut result = TrailResult {
        position: hero[0].clone(),
        bib: hero[1].clone(),
        name: hero[2].clone(),
        time: hero[3].clone(),
        ..TrailResult::default()
    };
    if result.bib != expected_bib {
        return Err(ParseError::BibMismatch { expected: s!(expected_bib), found: result.bib });
    }

    // Selected age-group row: Pos | Name | Time
    let age_row = cell_texts(select_first(&doc, SELECTED_AGE)?);
    result.pos_age = age_row
        .first()
        .cloned()
        .ok_or_else(|| ParseError::MissingElement(join!(SELECTED_AGE, " td")))?;
    if age_row.get(1) != Some(&result.name) {
        logw!("Bib {expected_bib}: age-group row is for {:?}", age_row.get(1));
    }

    let heading = text_of(select_first(&doc, AGE_HEADING)?);
    result.age_group = last_parenthesized(&heading)
        .ok_or_else(|| ParseError::MissingElement(format!("{AGE_HEADING} (…)")))?;

    let splits = select_all(&doc, SPLITS)?;
    if splits.len() <= DD_SPAN {
        return Err(ParseError::MissingElement(s!(SPLITS)));
    }
    result.kom = own_text(splits[KOM_SPAN]);
    result.dd = own_text(splits[DD_SPAN]);

    // Gender grid: Pos | Name | Time, the entrant itself included.
    let mut same_gender = Vec::new();
    for row in select_all(&doc, GENDER_ROWS)? {
        let cells = cell_texts(row);
        if cells.len() < 3 || is_header(&cells) {
            continue;
        }
        if cells[1] == result.name {
            result.pos_gender = cells[0].clone();
        } else {
            same_gender.push(NameTime::new(&cells[1], &cells[2]));
        }
    }

    Ok(EntrantPage { result, same_gender })
}

/// Every data row of the overall results grid. Used to discover bibs.
pub fn parse_results_grid(html: &str) -> Result<Vec<GridRow>, ParseError> {
    let doc = Html::parse_document(html);
    let rows = select_all(&doc, RESULTS_ROWS)?;
    if rows.is_empty() {
        return Err(ParseError::MissingElement(s!(RESULTS_ROWS)));
    }

    Ok(rows
        .into_iter()
        .map(cell_texts)
        .filter(|cells| cells.len() >= 4 && !is_header(cells))
        .map(|cells| GridRow {
            pos: cells[0].clone(),
            bib: cells[1].clone(),
            name: cells[2].clone(),
            time: cells[3].clone(),
        })
        .collect())
}
