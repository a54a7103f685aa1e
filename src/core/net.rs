// src/core/net.rs
// Blocking page fetcher with a randomized politeness delay. No retries.

use std::{thread, time::Duration};

use rand::Rng;
use reqwest::blocking::Client;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::Result;

pub struct PageFetcher {
    client: Client,
    url_template: String,
    max_delay_secs: u64,
}

impl PageFetcher {
    pub fn new(url_template: &str, max_delay_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client, url_template: s!(url_template), max_delay_secs })
    }

    pub fn url_for(&self, bib: &str) -> String {
        self.url_template.replace("{}", bib)
    }

    /// Sleep 0..max_delay_secs seconds, then GET the page for `bib`.
    pub fn fetch(&self, bib: &str) -> Result<String> {
        if self.max_delay_secs > 0 {
            let delay = rand::thread_rng().gen_range(0..self.max_delay_secs);
            logf!("Waiting {delay} seconds ...");
            thread::sleep(Duration::from_secs(delay));
        }
        let url = self.url_for(bib);
        logf!("Fetching page {bib}");
        logd!("GET {url}");

        let body = self.client.get(&url).send()?.error_for_status()?.text()?;
        Ok(body)
    }
}
