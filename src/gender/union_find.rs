// src/gender/union_find.rs
use std::cmp::Ordering;

/// Disjoint-set forest over `0..n` with union by rank and path compression.
#[derive(Clone, Debug)]
pub struct UnionFind {
    roots: Vec<usize>,
    ranks: Vec<u8>,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        Self { roots: (0..n).collect(), ranks: vec![0; n] }
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Representative of `x`'s set. Panics if `x >= len()`.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while root != self.roots[root] {
            root = self.roots[root];
        }
        // compress
        let mut cur = x;
        while cur != root {
            let next = self.roots[cur];
            self.roots[cur] = root;
            cur = next;
        }
        root
    }

    /// Join the sets of `x` and `y`. Returns false if they were already joined.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let (x, y) = (self.find(x), self.find(y));
        if x == y {
            return false;
        }
        match self.ranks[x].cmp(&self.ranks[y]) {
            Ordering::Less    => self.roots[x] = y,
            Ordering::Greater => self.roots[y] = x,
            Ordering::Equal   => { self.roots[y] = x; self.ranks[x] += 1 }
        }
        true
    }

    /// Number of distinct sets.
    pub fn components(&mut self) -> usize {
        (0..self.len()).filter(|&i| self.find(i) == i).count()
    }
}
