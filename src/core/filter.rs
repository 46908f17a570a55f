//! The Bloom filter contract.
//!
//! [`BloomFilter`] is polymorphic over the backing representation: the
//! dense packed-word variant and the sparse index-set variant both
//! implement it, and every operation below is defined purely in terms of
//! observable bit state, never storage. The default methods implement the
//! whole read-only surface (set algebra, containment, fullness, conversion
//! to the canonical hasher) over [`bits`](BloomFilter::bits); concrete
//! types override individual methods only where their representation can
//! do strictly better.
//!
//! # Guarantees
//!
//! 1. **No false negatives**: every bit a merged hasher or filter set
//!    remains set.
//! 2. **Shape discipline**: every cross-entity operation validates shape
//!    compatibility first and fails with
//!    [`ShapeMismatch`](crate::BloomSieveError::ShapeMismatch) before
//!    touching any state; a failed merge leaves the receiver unchanged.
//! 3. **Determinism**: all operations are bounded by the word count and
//!    complete deterministically; there is no cancellation concept.
//!
//! # Mutability
//!
//! `merge` and `merge_hasher` are the only mutators and take `&mut self`;
//! everything else is a pure read. The crate provides no internal
//! synchronization; the model assumes a single logical owner, and any
//! concurrent mutation is the caller's problem to serialize.
//!
//! # The word form
//!
//! `bits()` is the one in-memory wire format: an ordered sequence of u64
//! words, word `k` covering bit positions `[64k, 64k+63]`, low-order bit
//! first, trimmed of trailing all-zero words. An all-clear filter yields a
//! zero-length vector. Consumers must treat "shorter than expected" as
//! "remaining high bits are zero", never as an error. Two filters over
//! compatible shapes are interoperable through this form regardless of
//! their concrete types, which is what the default methods rely on.

use crate::core::hasher::{Hasher, StaticHasher};
use crate::core::shape::Shape;
use crate::error::Result;
use crate::util::bitops;

/// A mutable Bloom filter bound to a fixed [`Shape`].
///
/// # Examples
///
/// ```
/// use bloomsieve::core::{BloomFilter, StaticHasher};
/// use bloomsieve::filters::{DenseBloomFilter, SparseBloomFilter};
/// # use bloomsieve::core::{HashFunctionIdentity, ProcessType, Shape, Signedness};
/// # let id = HashFunctionIdentity::new("t", "docs", Signedness::Signed, ProcessType::Cyclic, 0);
/// # let shape = Shape::new(id, 3, 72, 17).unwrap();
///
/// let hasher = StaticHasher::new(1..=17, &shape).unwrap();
/// let mut dense = DenseBloomFilter::from_hasher(&hasher, &shape).unwrap();
///
/// // A sparse filter over a compatible shape interoperates freely.
/// let hasher2 = StaticHasher::new(11..=27, &shape).unwrap();
/// let sparse = SparseBloomFilter::from_hasher(&hasher2, &shape).unwrap();
///
/// assert_eq!(dense.or_cardinality(&sparse).unwrap(), 27);
/// dense.merge(&sparse).unwrap();
/// assert_eq!(dense.cardinality(), 27);
/// ```
pub trait BloomFilter {
    /// The shape this filter was created with; fixed for its lifetime.
    fn shape(&self) -> &Shape;

    /// The packed word array, trimmed of trailing all-zero words.
    fn bits(&self) -> Vec<u64>;

    /// Bitwise-OR another filter into this one in place.
    ///
    /// Extends the materialized storage if `other` sets bits in higher
    /// words than this filter currently holds.
    ///
    /// # Errors
    ///
    /// [`ShapeMismatch`](crate::BloomSieveError::ShapeMismatch) if the
    /// shapes are incompatible; the receiver is left unchanged.
    fn merge(&mut self, other: &dyn BloomFilter) -> Result<()>;

    /// Set every bit position the hasher yields for this filter's shape.
    ///
    /// # Errors
    ///
    /// [`ShapeMismatch`](crate::BloomSieveError::ShapeMismatch) if the
    /// hasher's native shape is incompatible; the receiver is left
    /// unchanged.
    fn merge_hasher(&mut self, hasher: &dyn Hasher) -> Result<()>;

    /// Number of set bits. Zero for an empty filter.
    fn cardinality(&self) -> usize {
        bitops::pop_count(&self.bits())
    }

    /// Population count of `self | other`, computed without mutating
    /// either filter.
    ///
    /// # Errors
    ///
    /// [`ShapeMismatch`](crate::BloomSieveError::ShapeMismatch) on
    /// incompatible shapes.
    fn or_cardinality(&self, other: &dyn BloomFilter) -> Result<usize> {
        self.shape().require_compatible(other.shape())?;
        Ok(bitops::or_cardinality(&self.bits(), &other.bits()))
    }

    /// Population count of `self & other`.
    ///
    /// # Errors
    ///
    /// [`ShapeMismatch`](crate::BloomSieveError::ShapeMismatch) on
    /// incompatible shapes.
    fn and_cardinality(&self, other: &dyn BloomFilter) -> Result<usize> {
        self.shape().require_compatible(other.shape())?;
        Ok(bitops::and_cardinality(&self.bits(), &other.bits()))
    }

    /// Population count of `self ^ other`: the symmetric difference,
    /// equal by construction to `or_cardinality - and_cardinality`.
    ///
    /// # Errors
    ///
    /// [`ShapeMismatch`](crate::BloomSieveError::ShapeMismatch) on
    /// incompatible shapes.
    fn xor_cardinality(&self, other: &dyn BloomFilter) -> Result<usize> {
        self.shape().require_compatible(other.shape())?;
        Ok(bitops::xor_cardinality(&self.bits(), &other.bits()))
    }

    /// Subset test: `true` iff every bit set in `other` is set in `self`.
    ///
    /// Not symmetric: a filter built from a superset of indices contains
    /// one built from a subset, not vice versa.
    ///
    /// # Errors
    ///
    /// [`ShapeMismatch`](crate::BloomSieveError::ShapeMismatch) on
    /// incompatible shapes.
    fn contains(&self, other: &dyn BloomFilter) -> Result<bool> {
        self.shape().require_compatible(other.shape())?;
        Ok(bitops::contains_all(&self.bits(), &other.bits()))
    }

    /// `true` iff every bit position the hasher yields is set in `self`.
    ///
    /// # Errors
    ///
    /// [`ShapeMismatch`](crate::BloomSieveError::ShapeMismatch) if the
    /// hasher's native shape is incompatible with this filter's.
    fn contains_hasher(&self, hasher: &dyn Hasher) -> Result<bool> {
        let words = self.bits();
        for index in hasher.bits(self.shape())? {
            let set = match words.get(index / 64) {
                Some(word) => (word >> (index % 64)) & 1 == 1,
                None => false,
            };
            if !set {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// `true` iff every one of the shape's bit positions is set.
    fn is_full(&self) -> bool {
        self.cardinality() == self.shape().number_of_bits()
    }

    /// The canonical contents of this filter: a [`StaticHasher`] over
    /// exactly the set bit positions, bound to this filter's shape.
    ///
    /// Rebuilding a filter from the returned hasher reproduces `bits()`
    /// exactly, whatever representation produced it.
    fn hasher(&self) -> StaticHasher {
        let words = self.bits();
        StaticHasher::from_sorted_distinct(bitops::indices_of(&words).collect(), self.shape())
    }
}
