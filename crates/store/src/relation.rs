//! Order-preserving relation tables.
//!
//! A `RelationTable<A, B>` is a sequence of `(A, B)` pairs with set
//! semantics: no pair ever appears twice, but insertion order among
//! distinct pairs is preserved. The same structure backs both the
//! canonical table owned by a store and the snapshot copies pushed into
//! entities, so a snapshot is just a clone.
//!
//! Pairs are directed: `(a, b)` reads "a follows b" or "a likes b"
//! depending on the relation.

use serde::{Deserialize, Serialize};

/// A duplicate-free, order-preserving sequence of directed pairs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelationTable<A, B> {
    pairs: Vec<(A, B)>,
}

impl<A, B> Default for RelationTable<A, B> {
    fn default() -> Self {
        RelationTable { pairs: Vec::new() }
    }
}

impl<A: PartialEq + Copy, B: PartialEq + Copy> RelationTable<A, B> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from seed pairs, dropping duplicates.
    ///
    /// First occurrence wins; relative order of distinct pairs is kept.
    pub fn from_pairs(seed: Vec<(A, B)>) -> Self {
        let mut table = Self::new();
        for (a, b) in seed {
            table.insert(a, b);
        }
        table
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True if the table holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Is the pair `(a, b)` present?
    pub fn contains(&self, a: A, b: B) -> bool {
        self.pairs.iter().any(|&(x, y)| x == a && y == b)
    }

    /// Append `(a, b)` unless already present. Returns whether the
    /// table changed.
    pub fn insert(&mut self, a: A, b: B) -> bool {
        if self.contains(a, b) {
            return false;
        }
        self.pairs.push((a, b));
        true
    }

    /// Remove `(a, b)` if present. Returns whether the table changed.
    pub fn remove(&mut self, a: A, b: B) -> bool {
        let before = self.pairs.len();
        self.pairs.retain(|&(x, y)| !(x == a && y == b));
        self.pairs.len() != before
    }

    /// Count pairs whose first component is `a`.
    pub fn count_from(&self, a: A) -> usize {
        self.pairs.iter().filter(|&&(x, _)| x == a).count()
    }

    /// Count pairs whose second component is `b`.
    pub fn count_to(&self, b: B) -> usize {
        self.pairs.iter().filter(|&&(_, y)| y == b).count()
    }

    /// First components of pairs pointing at `b`, in table order.
    pub fn sources_of(&self, b: B) -> impl Iterator<Item = A> + '_ {
        self.pairs
            .iter()
            .filter(move |&&(_, y)| y == b)
            .map(|&(x, _)| x)
    }

    /// Second components of pairs starting at `a`, in table order.
    pub fn targets_of(&self, a: A) -> impl Iterator<Item = B> + '_ {
        self.pairs
            .iter()
            .filter(move |&&(x, _)| x == a)
            .map(|&(_, y)| y)
    }

    /// All pairs, in table order.
    pub fn iter(&self) -> impl Iterator<Item = (A, B)> + '_ {
        self.pairs.iter().copied()
    }
}
