// src/config/consts.rs

// Trail site
pub const TRAIL_URL_TEMPLATE: &str = "http://www.greattrailchallenge.org/Results/default.aspx?r=412&bib={}";
pub const TRAIL_START_BIB: &str = "13";
pub const MAX_DELAY_SECS: u64 = 10; // be polite: sleep 0..N s before each fetch
pub const USER_AGENT: &str = concat!("race_scrape/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Local page cache
pub const CACHE_DIR: &str = "./pages_11k_cache";
pub const CACHE_PREFIX: &str = "page_for_bib_";
pub const CACHE_EXT: &str = ".html";

// Gender reference anchors
pub const MALE_BIB: &str = "2154";
pub const FEMALE_BIB: &str = "2155";
pub const MALE_LABEL: &str = "M";
pub const FEMALE_LABEL: &str = "F";
pub const RANDOM_PAIRS_MAX_ATTEMPTS: usize = 1_000_000;

// Export
pub const CONFIG_FILE: &str = "race_scrape.toml";
pub const TRAIL_OUT_FILE: &str = "results_11k.csv";
pub const PARKRUN_OUT_FILE: &str = "parkrun_results.csv";
