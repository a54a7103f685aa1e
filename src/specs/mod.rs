//! # Page specs
//!
//! Page-specific extraction: each spec knows where the ground truth lives in
//! one kind of page and returns plain structs.
//!
//! ## What lives here
//! - **Pure HTML parsing** of saved or fetched markup via `core::html`
//!   (CSS selectors over `scraper`).
//! - **Stable row shapes** per page, with a `HEADERS` constant and `to_row()`
//!   so the sinks never guess column order.
//!
//! ## What does **not** live here
//! - **Fetching and caching** (`core::net`, `cache`).
//! - **Cross-page logic**: gender inference spans every page and lives in
//!   `gender`; the pipelines in `scrape` wire the two together.
//!
//! ## Current specs
//! - `trail` – per-bib result page (entrant row, age group, splits, gender
//!   grid) and the overall results grid used for bib discovery.
//! - `parkrun` – hand-saved parkrun results page.
//!
//! A missing structural anchor is a `ParseError` for that page only; callers
//! decide whether to skip the page or abort.
pub mod parkrun;
pub mod trail;
