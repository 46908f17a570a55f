//! Sparse Bloom filter: explicit ordered index set.
//!
//! Stores the set bit positions themselves rather than a packed array.
//! Worth it when `number_of_bits` is large relative to the expected
//! cardinality: a 2^30-bit shape holding a few hundred bits costs a few
//! hundred entries here versus megabytes of words. Above roughly one set
//! bit per 64-bit word the dense variant wins on both space and speed.
//!
//! The observable contract is identical to
//! [`DenseBloomFilter`](crate::filters::DenseBloomFilter): `bits()`
//! materializes the same trimmed word array on demand, so the two variants
//! merge with and contain each other freely across compatible shapes.

use std::collections::BTreeSet;

use crate::core::filter::BloomFilter;
use crate::core::hasher::{Hasher, StaticHasher};
use crate::core::shape::Shape;
use crate::error::Result;
use crate::util::bitops;

/// Index-set-backed [`BloomFilter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseBloomFilter {
    shape: Shape,
    /// Ascending by BTreeSet ordering; every entry `< shape.number_of_bits()`.
    indices: BTreeSet<usize>,
}

impl SparseBloomFilter {
    /// Create an all-clear filter for `shape`.
    #[must_use]
    pub fn empty(shape: &Shape) -> Self {
        Self {
            shape: shape.clone(),
            indices: BTreeSet::new(),
        }
    }

    /// Create a filter with every bit position yielded by `hasher` set.
    ///
    /// # Errors
    ///
    /// [`ShapeMismatch`](crate::BloomSieveError::ShapeMismatch) if the
    /// hasher's native shape is incompatible with `shape`.
    pub fn from_hasher(hasher: &dyn Hasher, shape: &Shape) -> Result<Self> {
        let mut filter = Self::empty(shape);
        filter.merge_hasher(hasher)?;
        Ok(filter)
    }
}

impl BloomFilter for SparseBloomFilter {
    fn shape(&self) -> &Shape {
        &self.shape
    }

    fn bits(&self) -> Vec<u64> {
        let mut words = match self.indices.iter().next_back() {
            Some(&highest) => vec![0u64; highest / 64 + 1],
            None => return Vec::new(),
        };
        for &index in &self.indices {
            words[index / 64] |= 1u64 << (index % 64);
        }
        words
    }

    fn merge(&mut self, other: &dyn BloomFilter) -> Result<()> {
        self.shape.require_compatible(other.shape())?;
        let words = other.bits();
        self.indices.extend(bitops::indices_of(&words));
        Ok(())
    }

    fn merge_hasher(&mut self, hasher: &dyn Hasher) -> Result<()> {
        for index in hasher.bits(&self.shape)? {
            self.indices.insert(index);
        }
        Ok(())
    }

    fn cardinality(&self) -> usize {
        self.indices.len()
    }

    fn contains_hasher(&self, hasher: &dyn Hasher) -> Result<bool> {
        let mut indices = hasher.bits(&self.shape)?;
        Ok(indices.all(|index| self.indices.contains(&index)))
    }

    fn is_full(&self) -> bool {
        self.indices.len() == self.shape.number_of_bits()
    }

    fn hasher(&self) -> StaticHasher {
        StaticHasher::from_sorted_distinct(self.indices.iter().copied().collect(), &self.shape)
    }
}
