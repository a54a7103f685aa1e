// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, bail};

use crate::{
    cache::PageCache,
    config::{consts::CONFIG_FILE, options::{AppOptions, ExportFormat}},
    core::net::PageFetcher,
    file::{resolve_single_out_path, write_dataset},
    progress::Progress,
    scrape,
};

#[derive(Parser, Debug)]
#[command(name = "race_scrape", version, about = "Scrape race result pages into CSV, inferring gender where the site hides it")]
pub struct Cli {
    /// TOML config file (missing file = defaults)
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch every entrant page reachable from the start bib into the cache
    Crawl {
        #[arg(long)]
        start_bib: Option<String>,
        #[arg(long)]
        cache_dir: Option<PathBuf>,
        /// Upper bound (exclusive) of the random wait before each fetch, seconds
        #[arg(long)]
        max_delay: Option<u64>,
    },
    /// Turn cached entrant pages into one results file with genders filled in
    Process {
        #[arg(long)]
        cache_dir: Option<PathBuf>,
        /// Output file or directory
        #[arg(short, long)]
        out: Option<String>,
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,
    },
    /// Convert a saved parkrun results page
    Parkrun {
        page: PathBuf,
        #[arg(short, long)]
        out: Option<String>,
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,
    },
}

/// Prints one line per page to stderr.
struct ConsoleProgress {
    total: usize,
    seen: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.seen = 0;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, bib: &str) {
        self.seen += 1;
        eprintln!("[{}/{}] bib {bib}", self.seen, self.total.max(self.seen));
    }
    fn item_failed(&mut self, bib: &str, reason: &str) {
        self.seen += 1;
        eprintln!("[{}/{}] bib {bib} FAILED: {reason}", self.seen, self.total.max(self.seen));
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::log::init(cli.verbose);

    let mut opts = AppOptions::load(&cli.config)?;
    let mut progress = ConsoleProgress { total: 0, seen: 0 };

    match cli.command {
        Command::Crawl { start_bib, cache_dir, max_delay } => {
            if let Some(b) = start_bib { opts.trail.start_bib = b; }
            if let Some(d) = cache_dir { opts.trail.cache_dir = d; }
            if let Some(s) = max_delay { opts.trail.max_delay_secs = s; }

            let cache = PageCache::new(&opts.trail.cache_dir);
            let mut fetcher = PageFetcher::new(&opts.trail.url_template, opts.trail.max_delay_secs)?;
            let summary = scrape::crawl(
                &cache,
                &mut fetcher,
                &opts.trail.start_bib,
                &mut rand::thread_rng(),
                Some(&mut progress),
            )?;
            println!(
                "Crawled {} pages ({} fetched, {} cached) into {}",
                summary.pages, summary.fetched, summary.from_cache, cache.dir().display()
            );
        }
        Command::Process { cache_dir, out, format } => {
            if let Some(d) = cache_dir { opts.trail.cache_dir = d; }
            if let Some(f) = format { opts.export.format = f; }

            let cache = PageCache::new(&opts.trail.cache_dir);
            if cache.cached_bibs()?.is_empty() {
                bail!("No cached pages in {}; run `crawl` first", cache.dir().display());
            }
            let output = scrape::process(&cache, &opts.gender, Some(&mut progress))?;

            let default_name = opts.export.trail_out.to_string_lossy().into_owned();
            let path = resolve_single_out_path(out.as_deref().unwrap_or(""), &default_name)?;
            let path = write_dataset(&path, &output.data, opts.export.format)?;

            println!(
                "{} males, {} females: total={}",
                output.males, output.females, output.males + output.females
            );
            if !output.failed.is_empty() {
                println!("{} pages failed to parse:", output.failed.len());
                for (bib, reason) in &output.failed {
                    println!("  {bib}: {reason}");
                }
            }
            if !output.unlabeled.is_empty() {
                println!("No gender for bibs: {}", output.unlabeled.join(", "));
            }
            println!("Wrote {}", path.display());
        }
        Command::Parkrun { page, out, format } => {
            if let Some(f) = format { opts.export.format = f; }

            let data = scrape::convert_parkrun(&page)?;
            let default_name = opts.export.parkrun_out.to_string_lossy().into_owned();
            let path = resolve_single_out_path(out.as_deref().unwrap_or(""), &default_name)?;
            let path = write_dataset(&path, &data, opts.export.format)?;
            println!("Wrote {} rows to {}", data.rows.len(), path.display());
        }
    }
    Ok(())
}
