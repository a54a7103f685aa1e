// src/cache.rs
// On-disk page cache: one `page_for_bib_<bib>.html` per fetched entrant page.

use std::{fs, io, path::{Path, PathBuf}};

use crate::config::consts::{CACHE_EXT, CACHE_PREFIX};
use crate::core::sanitize::bib_from_file_name;
use crate::file::ensure_directory;

#[derive(Clone, Debug)]
pub struct PageCache {
    dir: PathBuf,
}

impl PageCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, bib: &str) -> PathBuf {
        self.dir.join(join!(CACHE_PREFIX, bib, CACHE_EXT))
    }

    pub fn contains(&self, bib: &str) -> bool {
        self.path_for(bib).is_file()
    }

    /// Cached page text, `None` when the bib was never saved.
    pub fn load(&self, bib: &str) -> io::Result<Option<String>> {
        let path = self.path_for(bib);
        if !path.is_file() {
            return Ok(None);
        }
        fs::read_to_string(path).map(Some)
    }

    /// Store a page. Keeps an existing copy unless `overwrite` is set.
    /// Returns whether the file was written.
    pub fn save(&self, bib: &str, html: &str, overwrite: bool) -> io::Result<bool> {
        let path = self.path_for(bib);
        if !overwrite && path.exists() {
            return Ok(false);
        }
        ensure_directory(&self.dir)?;
        fs::write(&path, html)?;
        logd!("Cached {}", path.display());
        Ok(true)
    }

    /// Bibs with a cached page, sorted. Unrelated files are ignored; a missing
    /// directory is an empty cache.
    pub fn cached_bibs(&self) -> io::Result<Vec<String>> {
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }
        let mut bibs = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let name = entry.file_name();
            if let Some(bib) = name.to_str().and_then(|n| bib_from_file_name(n, CACHE_PREFIX, CACHE_EXT)) {
                bibs.push(s!(bib));
            }
        }
        bibs.sort_unstable();
        Ok(bibs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tmp_cache(name: &str) -> PageCache {
        let mut p = std::env::temp_dir();
        p.push(format!("race_scrape_cache_{}", name));
        let _ = fs::remove_dir_all(&p);
        PageCache::new(p)
    }

    #[test]
    fn save_keeps_existing_unless_overwrite() {
        let cache = tmp_cache("overwrite");
        assert!(cache.save("7", "first", false).unwrap());
        assert!(!cache.save("7", "second", false).unwrap());
        assert_eq!(cache.load("7").unwrap().as_deref(), Some("first"));
        assert!(cache.save("7", "third", true).unwrap());
        assert_eq!(cache.load("7").unwrap().as_deref(), Some("third"));
    }

    #[test]
    fn lists_only_page_files() {
        let cache = tmp_cache("list");
        cache.save("20", "<html/>", false).unwrap();
        cache.save("3", "<html/>", false).unwrap();
        fs::write(cache.dir().join("notes.txt"), "x").unwrap();
        assert_eq!(cache.cached_bibs().unwrap(), vec!["20", "3"]);
    }

    #[test]
    fn missing_dir_is_empty() {
        let cache = tmp_cache("missing");
        assert!(cache.cached_bibs().unwrap().is_empty());
        assert_eq!(cache.load("1").unwrap(), None);
        assert!(!cache.contains("1"));
    }

    #[test]
    fn utf8_round_trips() {
        let cache = tmp_cache("utf8");
        cache.save("9", "Zoë Ærø", false).unwrap();
        assert_eq!(cache.load("9").unwrap().as_deref(), Some("Zoë Ærø"));
    }
}
