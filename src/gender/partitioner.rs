// src/gender/partitioner.rs
use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};

use rand::Rng;

use super::{GenderMap, IdentityResolver, UnionFind};
use crate::config::options::{Consolidation, GenderConfig};
use crate::error::GenderError;
use crate::types::{Gender, NameTime};

/// Keys believed to belong to entrants of one gender.
pub type Group = BTreeSet<NameTime>;

/// Builds same-gender groups from per-page evidence and, once every page has
/// been added, reduces them to exactly two labeled groups.
///
/// Accumulation is first-match: new evidence is folded into the lowest-index
/// group it overlaps, even if it overlaps later groups too. Those stay
/// fragmented until [`finalize`](Self::finalize) consolidates them.
#[derive(Clone, Debug)]
pub struct GenderPartitioner {
    male_bib: String,
    female_bib: String,
    strategy: Consolidation,
    groups: Vec<Group>,
    male_key: Option<NameTime>,
    female_key: Option<NameTime>,
    finalized: bool,
}

impl GenderPartitioner {
    pub fn new(config: &GenderConfig) -> Self {
        Self {
            male_bib: config.male_bib.clone(),
            female_bib: config.female_bib.clone(),
            strategy: config.strategy.clone(),
            groups: Vec::new(),
            male_key: None,
            female_key: None,
            finalized: false,
        }
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Add one entrant's evidence: its own key plus the keys of the entrants
    /// listed as sharing its gender.
    pub fn add<I>(&mut self, bib: &str, key: NameTime, peers: I) -> Result<(), GenderError>
    where
        I: IntoIterator<Item = NameTime>,
    {
        if self.finalized {
            return Err(GenderError::AlreadyFinalized);
        }
        if bib.is_empty() {
            return Err(GenderError::EmptyBib(key));
        }
        if bib == self.male_bib {
            self.male_key = Some(key.clone());
        }
        if bib == self.female_bib {
            self.female_key = Some(key.clone());
        }

        let mut candidate: Group = peers.into_iter().collect();
        candidate.insert(key);

        match self.groups.iter().position(|g| !g.is_disjoint(&candidate)) {
            Some(ix) => {
                logd!("Adding {bib} to group {ix}");
                self.groups[ix].extend(candidate);
            }
            None => {
                logd!("Adding {bib} as new group {}", self.groups.len());
                self.groups.push(candidate);
            }
        }
        Ok(())
    }

    /// Consolidate with the configured strategy and label every resolvable key.
    pub fn finalize(&mut self, resolver: &IdentityResolver) -> Result<GenderMap, GenderError> {
        self.finalize_with_rng(resolver, &mut rand::thread_rng())
    }

    /// As [`finalize`](Self::finalize); `rng` drives the random-pairs strategy only.
    pub fn finalize_with_rng<R: Rng + ?Sized>(
        &mut self,
        resolver: &IdentityResolver,
        rng: &mut R,
    ) -> Result<GenderMap, GenderError> {
        if self.finalized {
            return Err(GenderError::AlreadyFinalized);
        }
        let male_key = self.male_key.clone().ok_or(GenderError::MissingAnchor(Gender::Male))?;
        let female_key = self.female_key.clone().ok_or(GenderError::MissingAnchor(Gender::Female))?;

        logf!("Finalising: {} groups", self.groups.len());
        match self.strategy {
            Consolidation::UnionFind => self.merge_union_find()?,
            Consolidation::RandomPairs { max_attempts } => self.merge_random_pairs(rng, max_attempts)?,
        }

        let map = self.label(resolver, &male_key, &female_key)?;
        self.finalized = true;
        Ok(map)
    }

    /// Any two groups sharing a key end up in one component.
    fn merge_union_find(&mut self) -> Result<(), GenderError> {
        let mut uf = UnionFind::new(self.groups.len());
        {
            let mut owner: HashMap<&NameTime, usize> = HashMap::new();
            for (ix, group) in self.groups.iter().enumerate() {
                for key in group {
                    match owner.entry(key) {
                        Entry::Occupied(e) => { uf.union(*e.get(), ix); }
                        Entry::Vacant(e) => { e.insert(ix); }
                    }
                }
            }
        }

        // Components keep the position of their lowest-index group.
        let mut slot_of_root: HashMap<usize, usize> = HashMap::new();
        let mut merged: Vec<Group> = Vec::new();
        for (ix, group) in std::mem::take(&mut self.groups).into_iter().enumerate() {
            match slot_of_root.entry(uf.find(ix)) {
                Entry::Occupied(e) => merged[*e.get()].extend(group),
                Entry::Vacant(e) => {
                    e.insert(merged.len());
                    merged.push(group);
                }
            }
        }
        self.groups = merged;
        logf!("Consolidated to {} groups", self.groups.len());

        if self.groups.len() > 2 {
            return Err(GenderError::NonConvergent { groups: self.groups.len() });
        }
        Ok(())
    }

    /// Pick two distinct groups at random; join them if they overlap. Repeat
    /// until two remain or `max_attempts` picks have been spent.
    fn merge_random_pairs<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        max_attempts: usize,
    ) -> Result<(), GenderError> {
        let mut attempts = 0usize;
        while self.groups.len() > 2 {
            if attempts >= max_attempts {
                logw!("Gave up after {attempts} picks with {} groups left", self.groups.len());
                return Err(GenderError::NonConvergent { groups: self.groups.len() });
            }
            attempts += 1;

            let n = self.groups.len();
            let g1 = rng.gen_range(0..n);
            let mut g2 = rng.gen_range(0..n - 1);
            if g2 >= g1 {
                g2 += 1;
            }
            if self.groups[g1].is_disjoint(&self.groups[g2]) {
                continue;
            }

            logd!("Joining group {g2} into {g1}");
            let absorbed = self.groups.remove(g2);
            let into = if g2 < g1 { g1 - 1 } else { g1 };
            self.groups[into].extend(absorbed);
        }
        logf!("Consolidated to {} groups after {attempts} picks", self.groups.len());
        Ok(())
    }

    fn label(
        &self,
        resolver: &IdentityResolver,
        male_key: &NameTime,
        female_key: &NameTime,
    ) -> Result<GenderMap, GenderError> {
        let male_ix = self.sole_group_of(male_key, Gender::Male)?;
        let female_ix = self.sole_group_of(female_key, Gender::Female)?;
        if male_ix == female_ix {
            return Err(GenderError::InvariantViolation(format!(
                "male anchor {male_key} and female anchor {female_key} share a group"
            )));
        }

        let mut map = GenderMap::default();
        for (ix, gender) in [(male_ix, Gender::Male), (female_ix, Gender::Female)] {
            for key in &self.groups[ix] {
                match resolver.resolve(key) {
                    Ok(bib) => map.insert(bib, gender)?,
                    Err(e) => logd!("Skipping: {e}"),
                }
            }
        }

        let (males, females) = map.counts();
        logf!("Male is group {male_ix} ({males}), female is group {female_ix} ({females})");
        Ok(map)
    }

    fn sole_group_of(&self, key: &NameTime, gender: Gender) -> Result<usize, GenderError> {
        let mut hits = self
            .groups
            .iter()
            .enumerate()
            .filter(|(_, g)| g.contains(key))
            .map(|(ix, _)| ix);

        match (hits.next(), hits.next()) {
            (Some(ix), None) => Ok(ix),
            (None, _) => Err(GenderError::InvariantViolation(format!(
                "{gender} anchor {key} is in no group"
            ))),
            (Some(_), Some(_)) => Err(GenderError::InvariantViolation(format!(
                "{gender} anchor {key} is in more than one group"
            ))),
        }
    }
}
