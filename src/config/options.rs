// src/config/options.rs
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::consts::*;
use crate::error::Result;
use crate::types::Gender;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub trail: TrailOptions,
    pub gender: GenderConfig,
    pub export: ExportOptions,
}

impl AppOptions {
    /// Read options from a TOML file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            logd!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TrailOptions {
    /// Entrant page URL; `{}` is replaced by the bib.
    pub url_template: String,
    pub cache_dir: PathBuf,
    pub start_bib: String,
    pub max_delay_secs: u64,
}

impl Default for TrailOptions {
    fn default() -> Self {
        Self {
            url_template: s!(TRAIL_URL_TEMPLATE),
            cache_dir: PathBuf::from(CACHE_DIR),
            start_bib: s!(TRAIL_START_BIB),
            max_delay_secs: MAX_DELAY_SECS,
        }
    }
}

/// Reference anchors and output labels for gender inference.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GenderConfig {
    pub male_bib: String,
    pub female_bib: String,
    pub male_label: String,
    pub female_label: String,
    pub strategy: Consolidation,
}

impl Default for GenderConfig {
    fn default() -> Self {
        Self {
            male_bib: s!(MALE_BIB),
            female_bib: s!(FEMALE_BIB),
            male_label: s!(MALE_LABEL),
            female_label: s!(FEMALE_LABEL),
            strategy: Consolidation::UnionFind,
        }
    }
}

impl GenderConfig {
    pub fn with_anchors(male_bib: &str, female_bib: &str) -> Self {
        Self {
            male_bib: s!(male_bib),
            female_bib: s!(female_bib),
            ..Self::default()
        }
    }

    pub fn label(&self, gender: Gender) -> &str {
        match gender {
            Gender::Male => &self.male_label,
            Gender::Female => &self.female_label,
        }
    }
}

/// How the accumulated groups are reduced to two at finalize time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Consolidation {
    /// Disjoint-set union over group indices; deterministic, single pass.
    #[default]
    UnionFind,
    /// Legacy loop: merge randomly picked overlapping pairs, bounded by `max_attempts`.
    RandomPairs {
        #[serde(default = "default_max_attempts")]
        max_attempts: usize,
    },
}

fn default_max_attempts() -> usize {
    RANDOM_PAIRS_MAX_ATTEMPTS
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub trail_out: PathBuf,
    pub parkrun_out: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            trail_out: PathBuf::from(TRAIL_OUT_FILE),
            parkrun_out: PathBuf::from(PARKRUN_OUT_FILE),
        }
    }
}
