// tests/common/mod.rs
//
// Synthetic trail-site pages shaped like the real per-bib result page.
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

pub struct Runner {
    pub bib: &'static str,
    pub name: &'static str,
    pub time: &'static str,
    pub female: bool,
}

pub const FIELD: [Runner; 4] = [
    Runner { bib: "2154", name: "Adam Ant",   time: "00:40:00", female: false },
    Runner { bib: "2155", name: "Bea Bop",    time: "00:42:00", female: true },
    Runner { bib: "9001", name: "Carl Cox",   time: "00:45:00", female: false },
    Runner { bib: "9002", name: "Dörte Dahl", time: "00:50:00", female: true },
];

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("race_scrape_it_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

/// Full entrant page for `FIELD[me]`. The gender grid lists every runner of
/// the same gender, the entrant included.
pub fn entrant_page(me: usize) -> String {
    let hero = &FIELD[me];

    let mut grid = String::from("<tr><th>Pos</th><th>Bib</th><th>Name</th><th>Time</th></tr>");
    for (i, r) in FIELD.iter().enumerate() {
        let class = if i == me { r#" class="selected""# } else { "" };
        grid.push_str(&format!(
            "<tr{class}><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            i + 1, r.bib, r.name, r.time
        ));
    }

    let mut same = String::from("<tr><td>Pos</td><td>Name</td><td>Time</td></tr>");
    for (pos, r) in FIELD.iter().filter(|r| r.female == hero.female).enumerate() {
        same.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            pos + 1, r.name, r.time
        ));
    }

    let group = if hero.female { "F30-39" } else { "M30-39" };
    format!(
        r#"<html><body>
<table id="ctl00_SecondaryContent_ResultsGrid">{grid}</table>
<div id="ctl00_SecondaryContent_PanelAgeGroupResults"><div><div><h2>
    Age Group Results ({group})
</h2></div></div></div>
<table id="ctl00_SecondaryContent_AgeGroupGrid">
  <tr class="selected"><td>1</td><td>{name}</td><td>{time}</td></tr>
</table>
<div id="split-times">
  <span><b>Start </b>00:00:00</span>
  <span><b>King of the Mountain </b>00:1{me}:00</span>
  <span><b>Summit </b>00:20:00</span>
  <span><b>Demon Descent </b>00:0{me}:30</span>
</div>
<table id="ctl00_SecondaryContent_GenderGroupGrid">{same}</table>
</body></html>"#,
        name = hero.name,
        time = hero.time,
    )
}

/// A page with nothing below the results grid.
pub fn broken_page(bib: &str) -> String {
    format!(
        r#"<html><body><table id="ctl00_SecondaryContent_ResultsGrid">
<tr class="selected"><td>9</td><td>{bib}</td><td>Nobody</td><td>02:00:00</td></tr>
</table></body></html>"#
    )
}
