//! Dense Bloom filter: packed 64-bit words.
//!
//! The default representation. Storage cost follows the highest set bit
//! rather than the nominal shape (an empty filter owns no words at all),
//! so shapes sized generously for a worst case cost nothing until the
//! filter actually fills (see [`BitVec`] for the trimming rules).
//!
//! Prefer this variant whenever a meaningful fraction of the bit universe
//! will be set; for very large shapes holding few bits, the
//! [`SparseBloomFilter`](crate::filters::SparseBloomFilter) stores indices
//! explicitly instead. Both satisfy the same [`BloomFilter`] contract and
//! interoperate freely across compatible shapes.
//!
//! # Examples
//!
//! ```
//! use bloomsieve::core::{BloomFilter, StaticHasher};
//! use bloomsieve::filters::DenseBloomFilter;
//! # use bloomsieve::core::{HashFunctionIdentity, ProcessType, Shape, Signedness};
//! # let id = HashFunctionIdentity::new("t", "docs", Signedness::Signed, ProcessType::Cyclic, 0);
//! # let shape = Shape::new(id, 3, 72, 17).unwrap();
//!
//! let hasher = StaticHasher::new(0..=16, &shape).unwrap();
//! let filter = DenseBloomFilter::from_hasher(&hasher, &shape).unwrap();
//!
//! // 17 low bits set: one word materialized despite the 72-bit shape.
//! assert_eq!(filter.bits(), vec![0x1FFFF]);
//! assert_eq!(filter.cardinality(), 17);
//! ```

use crate::core::bitvec::BitVec;
use crate::core::filter::BloomFilter;
use crate::core::hasher::{Hasher, StaticHasher};
use crate::core::shape::Shape;
use crate::error::Result;

/// Word-backed [`BloomFilter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseBloomFilter {
    shape: Shape,
    bits: BitVec,
}

impl DenseBloomFilter {
    /// Create an all-clear filter for `shape`.
    ///
    /// Materialized storage has zero length until the first mutation.
    #[must_use]
    pub fn empty(shape: &Shape) -> Self {
        Self {
            shape: shape.clone(),
            bits: BitVec::new(shape.number_of_bits()),
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

    /// Reconstruct from the packed word form (deserialization path).
    ///
    /// # Errors
    ///
    /// [`IndexOutOfBounds`](crate::BloomSieveError::IndexOutOfBounds) if
    /// the words set a bit at or beyond the shape's universe.
    pub fn from_words(words: Vec<u64>, shape: &Shape) -> Result<Self> {
        Ok(Self {
            shape: shape.clone(),
            bits: BitVec::from_words(words, shape.number_of_bits())?,
        })
    }
}

impl BloomFilter for DenseBloomFilter {
    fn shape(&self) -> &Shape {
        &self.shape
    }

    fn bits(&self) -> Vec<u64> {
        self.bits.words().to_vec()
    }

    fn merge(&mut self, other: &dyn BloomFilter) -> Result<()> {
        self.shape.require_compatible(other.shape())?;
        self.bits.or_words(&other.bits());
        Ok(())
    }

    fn merge_hasher(&mut self, hasher: &dyn Hasher) -> Result<()> {
        // The shape check happens inside `bits`; every yielded index is in
        // range by the Hasher contract, so nothing below can fail and the
        // merge is all-or-nothing.
        for index in hasher.bits(&self.shape)? {
            self.bits.set(index);
        }
        Ok(())
    }

    fn cardinality(&self) -> usize {
        self.bits.count_ones()
    }

    fn contains_hasher(&self, hasher: &dyn Hasher) -> Result<bool> {
        let mut indices = hasher.bits(&self.shape)?;
        Ok(indices.all(|index| self.bits.get(index)))
    }

    fn hasher(&self) -> StaticHasher {
        StaticHasher::from_sorted_distinct(self.bits.iter_ones().collect(), &self.shape)
    }
}
