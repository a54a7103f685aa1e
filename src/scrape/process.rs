// src/scrape/process.rs
use rand::Rng;

use crate::{
    cache::PageCache,
    config::options::GenderConfig,
    error::Result,
    gender::GenderMatcher,
    progress::Progress,
    specs::trail::{parse_entrant_page, HEADERS},
    store::{Dataset, EntrantStore},
};

#[derive(Clone, Debug, Default)]
pub struct ProcessOutput {
    pub data: Dataset,
    pub males: usize,
    pub females: usize,
    /// Bibs stored but left without a gender (key collisions)
    pub unlabeled: Vec<String>,
    /// (bib, reason) for pages that failed to parse
    pub failed: Vec<(String, String)>,
}

/// Read every cached entrant page, infer genders, and build the export table.
pub fn process(
    cache: &PageCache,
    config: &GenderConfig,
    progress: Option<&mut dyn Progress>,
) -> Result<ProcessOutput> {
    process_with_rng(cache, config, &mut rand::thread_rng(), progress)
}

/// As [`process`]; `rng` only matters for the random-pairs strategy.
pub fn process_with_rng<R: Rng + ?Sized>(
    cache: &PageCache,
    config: &GenderConfig,
    rng: &mut R,
    mut progress: Option<&mut dyn Progress>,
) -> Result<ProcessOutput> {
    let bibs = cache.cached_bibs()?;
    if let Some(p) = progress.as_deref_mut() {
        p.begin(bibs.len());
    }

    let mut store = EntrantStore::new();
    let mut matcher = GenderMatcher::new(config);
    let mut failed = Vec::new();

    for bib in &bibs {
        let Some(html) = cache.load(bib)? else {
            logw!("Bib {bib}: page vanished from cache");
            continue;
        };
        match parse_entrant_page(&html, bib) {
            Ok(page) => {
                logd!("Processing bib {bib}");
                matcher.add(bib, page.result.name_time(), page.same_gender)?;
                store.insert(page.result);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(bib);
                }
            }
            Err(e) => {
                loge!("Bib {bib}: {e}");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(bib, &e.to_string());
                }
                failed.push((bib.clone(), e.to_string()));
            }
        }
    }

    let genders = matcher.finalize_with_rng(rng)?;

    let mut data = Dataset::new(&HEADERS);
    let mut unlabeled = Vec::new();
    for result in store.iter() {
        let label = match genders.gender_for(&result.bib) {
            Ok(g) => config.label(g),
            Err(e) => {
                loge!("{e}");
                unlabeled.push(result.bib.clone());
                ""
            }
        };
        data.rows.push(result.to_row(label));
    }

    let (males, females) = genders.counts();
    logf!("{males} males, {females} females: total={}", males + females);
    if !failed.is_empty() {
        logw!("{} of {} pages could not be parsed", failed.len(), bibs.len());
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(ProcessOutput { data, males, females, unlabeled, failed })
}
