// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod gender;
pub mod specs;
pub mod types;

pub mod cache;
pub mod csv;
pub mod file;
pub mod progress;
pub mod scrape;
pub mod store;

pub use error::{GenderError, ParseError, ScrapeError};
pub use gender::{GenderMap, GenderMatcher};
pub use types::{Gender, NameTime};
