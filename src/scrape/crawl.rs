// src/scrape/crawl.rs
use std::collections::BTreeSet;

use rand::Rng;
use rand::seq::IteratorRandom;

use crate::{
    cache::PageCache,
    core::net::PageFetcher,
    error::Result,
    progress::Progress,
    specs::trail::parse_results_grid,
};

/// Where uncached pages come from.
pub trait PageSource {
    fn fetch(&mut self, bib: &str) -> Result<String>;
}

impl PageSource for PageFetcher {
    fn fetch(&mut self, bib: &str) -> Result<String> {
        PageFetcher::fetch(self, bib)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CrawlSummary {
    /// Pages visited, cached or not
    pub pages: usize,
    pub fetched: usize,
    pub from_cache: usize,
    /// Pages whose results grid could not be read
    pub grid_errors: usize,
    pub done: BTreeSet<String>,
}

/// Walk the site from `start_bib`, following every bib listed in each page's
/// results grid, until no unvisited bib is left. Bibs already in the cache are
/// queued up front so an interrupted crawl picks up where it stopped.
///
/// The next bib is drawn at random from the queue. A fetch failure aborts the
/// crawl; pages fetched so far stay cached.
pub fn crawl<S, R>(
    cache: &PageCache,
    source: &mut S,
    start_bib: &str,
    rng: &mut R,
    mut progress: Option<&mut dyn Progress>,
) -> Result<CrawlSummary>
where
    S: PageSource + ?Sized,
    R: Rng + ?Sized,
{
    let mut summary = CrawlSummary::default();
    let mut todo: BTreeSet<String> = cache.cached_bibs()?.into_iter().collect();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(todo.len().max(1));
    }

    let mut next = s!(start_bib);
    loop {
        let html = match cache.load(&next)? {
            Some(html) => {
                summary.from_cache += 1;
                html
            }
            None => {
                let html = source.fetch(&next)?;
                cache.save(&next, &html, false)?;
                summary.fetched += 1;
                html
            }
        };
        summary.pages += 1;
        summary.done.insert(next.clone());
        todo.remove(&next);

        match parse_results_grid(&html) {
            Ok(rows) => {
                for row in rows {
                    if !summary.done.contains(&row.bib) {
                        todo.insert(row.bib);
                    }
                }
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(&next);
                }
            }
            Err(e) => {
                loge!("Bib {next}: {e}");
                summary.grid_errors += 1;
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(&next, &e.to_string());
                }
            }
        }

        match todo.iter().choose(rng) {
            Some(bib) => next = bib.clone(),
            None => break,
        }
        logd!("Next bib = {next} ({} left)", todo.len());
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    logf!(
        "Total pages processed: {} ({} fetched, {} cached)",
        summary.pages, summary.fetched, summary.from_cache
    );
    Ok(summary)
}
