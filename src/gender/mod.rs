// src/gender/mod.rs
//! # Gender inference
//!
//! Entrant pages never state a gender. Each page does list every entrant of the
//! same gender, by `name=time` only. This module stitches those partial lists
//! into two groups and labels them from two entrants of known gender.
//!
//! ```text
//! page → (bib, name=time, peers) → IdentityResolver::register
//!                                → GenderPartitioner::add
//! all pages added → GenderPartitioner::finalize → GenderMap (bib → gender)
//! ```
//!
//! [`GenderMatcher`] bundles the resolver and partitioner for a single run.

mod partitioner;
mod resolver;
mod union_find;

pub use partitioner::{GenderPartitioner, Group};
pub use resolver::IdentityResolver;
pub use union_find::UnionFind;

use std::collections::HashMap;

use rand::Rng;

use crate::config::options::GenderConfig;
use crate::error::GenderError;
use crate::types::{Gender, NameTime};

/// Final bib → gender assignment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenderMap {
    by_bib: HashMap<String, Gender>,
}

impl GenderMap {
    pub(crate) fn insert(&mut self, bib: &str, gender: Gender) -> Result<(), GenderError> {
        match self.by_bib.insert(s!(bib), gender) {
            Some(prev) if prev != gender => Err(GenderError::InvariantViolation(format!(
                "bib {bib} is in both the {prev} and {gender} groups"
            ))),
            _ => Ok(()),
        }
    }

    pub fn gender_for(&self, bib: &str) -> Result<Gender, GenderError> {
        self.by_bib
            .get(bib)
            .copied()
            .ok_or_else(|| GenderError::UnknownBib(s!(bib)))
    }

    /// (males, females)
    pub fn counts(&self) -> (usize, usize) {
        let males = self.by_bib.values().filter(|g| **g == Gender::Male).count();
        (males, self.by_bib.len() - males)
    }

    pub fn len(&self) -> usize {
        self.by_bib.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_bib.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Gender)> {
        self.by_bib.iter().map(|(b, g)| (b.as_str(), *g))
    }
}

/// Resolver + partitioner pair owned by one processing run.
#[derive(Clone, Debug)]
pub struct GenderMatcher {
    resolver: IdentityResolver,
    partitioner: GenderPartitioner,
}

impl GenderMatcher {
    pub fn new(config: &GenderConfig) -> Self {
        Self {
            resolver: IdentityResolver::new(),
            partitioner: GenderPartitioner::new(config),
        }
    }

    /// Register `key → bib` and feed the same-gender evidence to the partitioner.
    pub fn add<I>(&mut self, bib: &str, key: NameTime, peers: I) -> Result<(), GenderError>
    where
        I: IntoIterator<Item = NameTime>,
    {
        self.partitioner.add(bib, key.clone(), peers)?;
        if let Some(prev) = self.resolver.register(bib, key.clone()) {
            logw!("Key {key} was bib {prev}, now bib {bib}");
        }
        Ok(())
    }

    pub fn finalize(&mut self) -> Result<GenderMap, GenderError> {
        self.partitioner.finalize(&self.resolver)
    }

    pub fn finalize_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<GenderMap, GenderError> {
        self.partitioner.finalize_with_rng(&self.resolver, rng)
    }

    pub fn resolver(&self) -> &IdentityResolver {
        &self.resolver
    }

    pub fn partitioner(&self) -> &GenderPartitioner {
        &self.partitioner
    }
}
