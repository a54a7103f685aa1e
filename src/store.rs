// src/store.rs
use std::collections::BTreeMap;

use crate::specs::trail::TrailResult;

/// Headers + rows, ready for a sink.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Dataset {
    pub fn new<S: AsRef<str>>(headers: &[S]) -> Self {
        Self {
            headers: headers.iter().map(|h| s!(h.as_ref())).collect(),
            rows: Vec::new(),
        }
    }
}

/// Entrant records of one run, keyed by bib. The gender matcher only ever sees
/// bibs and keys; full records stay here.
#[derive(Clone, Debug, Default)]
pub struct EntrantStore {
    by_bib: BTreeMap<String, TrailResult>,
}

impl EntrantStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the record previously stored for the same bib.
    pub fn insert(&mut self, result: TrailResult) -> Option<TrailResult> {
        self.by_bib.insert(result.bib.clone(), result)
    }

    pub fn get(&self, bib: &str) -> Option<&TrailResult> {
        self.by_bib.get(bib)
    }

    pub fn len(&self) -> usize {
        self.by_bib.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_bib.is_empty()
    }

    /// Records in bib order.
    pub fn iter(&self) -> impl Iterator<Item = &TrailResult> {
        self.by_bib.values()
    }
}
