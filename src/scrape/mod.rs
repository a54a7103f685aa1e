// src/scrape/mod.rs
mod crawl;
mod parkrun;
mod process;

pub use crawl::{crawl, CrawlSummary, PageSource};
pub use parkrun::convert_parkrun;
pub use process::{process, process_with_rng, ProcessOutput};
