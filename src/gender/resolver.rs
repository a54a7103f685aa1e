// src/gender/resolver.rs
use std::collections::HashMap;

use crate::error::GenderError;
use crate::types::NameTime;

/// Maps `name=time` keys back to bibs. Peer lists only carry the key.
#[derive(Clone, Debug, Default)]
pub struct IdentityResolver {
    by_key: HashMap<NameTime, String>,
}

impl IdentityResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last write wins. Returns the bib previously held by `key` if it differs,
    /// which means two entrants share a name and a finish time.
    pub fn register(&mut self, bib: &str, key: NameTime) -> Option<String> {
        match self.by_key.insert(key, s!(bib)) {
            Some(prev) if prev != bib => Some(prev),
            _ => None,
        }
    }

    pub fn resolve(&self, key: &NameTime) -> Result<&str, GenderError> {
        self.by_key
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| GenderError::NotFound(key.clone()))
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}
