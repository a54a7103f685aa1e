// src/error.rs
//! Error types for scraping, extraction and gender inference.

use thiserror::Error;

use crate::types::{Gender, NameTime};

/// Failures of the gender-inference core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenderError {
    /// A peer key was mentioned but its own page was never processed
    #[error("no entrant registered for {0}")]
    NotFound(NameTime),

    #[error("bib must not be empty (key {0})")]
    EmptyBib(NameTime),

    /// The reference bib for this gender was never added
    #[error("reference {0} entrant was never added")]
    MissingAnchor(Gender),

    /// Inconsistent evidence; the two final groups cannot be labeled
    #[error("inconsistent gender groups: {0}")]
    InvariantViolation(String),

    #[error("gender groups already finalized")]
    AlreadyFinalized,

    #[error("no gender recorded for bib {0}")]
    UnknownBib(String),

    /// More than two groups share no key with each other
    #[error("could not reduce {groups} gender groups to two")]
    NonConvergent { groups: usize },
}

/// Structural failures while reading one page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid selector {0}")]
    Selector(String),

    #[error("page has no element matching {0}")]
    MissingElement(String),

    #[error("page is for bib {found}, expected {expected}")]
    BibMismatch { expected: String, found: String },
}

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Gender(#[from] GenderError),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
