//! The hasher abstraction: shape-bound producers of bit index sequences.
//!
//! A [`Hasher`] is the only way bits enter a filter. It turns "the things we
//! want represented" into a finite sequence of bit positions for a given
//! [`Shape`], without the filter ever seeing the underlying items. Two
//! implementations ship with the crate:
//!
//! - [`StaticHasher`] (this module): a precomputed, sorted, duplicate-free
//!   index set. This is the canonical form; every filter can be converted to and
//!   from one, which makes it the lingua franca for comparing the contents
//!   of filters built through different code paths or representations.
//! - [`DynamicHasher`](crate::hashing::DynamicHasher): hashes raw item
//!   bytes on the fly.
//!
//! # Restartability
//!
//! `bits` returns an independent iterator on every call; no cursor is
//! shared between traversals, so callers may re-read freely.

use crate::core::shape::Shape;
use crate::error::{BloomSieveError, Result};

/// A restartable traversal of bit indices, each `< number_of_bits` of the
/// shape it was requested for.
pub type BitIter<'a> = Box<dyn Iterator<Item = usize> + 'a>;

/// Produces, for a given [`Shape`], a finite sequence of bit indices.
///
/// # Contract
///
/// - Every yielded index is in `[0, shape.number_of_bits())`.
/// - `bits` validates the shape it is handed against the hasher's native
///   shape and fails with [`BloomSieveError::ShapeMismatch`] rather than
///   yielding indices for the wrong geometry.
/// - Repeated `bits` calls yield independent traversals of the same
///   sequence.
pub trait Hasher {
    /// Number of logical entries this hasher was built from.
    ///
    /// For a [`StaticHasher`] this is the count of distinct stored indices;
    /// for an item-backed hasher it is the number of items, which is
    /// usually smaller than the number of bit positions it will yield.
    fn size(&self) -> usize;

    /// `true` if the hasher was built from nothing and will yield no bits.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// The bit positions to set for `shape`.
    ///
    /// # Errors
    ///
    /// Returns [`BloomSieveError::ShapeMismatch`] if `shape` is not
    /// compatible with the hasher's native shape.
    fn bits<'a>(&'a self, shape: &Shape) -> Result<BitIter<'a>>;

    /// The shape this hasher natively produces bits for.
    fn shape(&self) -> &Shape;
}

/// A [`Hasher`] backed by an explicit, sorted, duplicate-free index set.
///
/// Construction accepts indices in any order, with duplicates; what is
/// stored is always the ascending deduplicated form, so `size()` and the
/// `bits` traversal are canonical regardless of input order. Every index is
/// validated against the declared shape at construction; out-of-range
/// values are a hard error, never truncated.
///
/// # Examples
///
/// ```
/// use bloomsieve::core::{Hasher, HashFunctionIdentity, ProcessType, Shape, Signedness, StaticHasher};
///
/// let id = HashFunctionIdentity::new("t", "docs", Signedness::Signed, ProcessType::Cyclic, 0);
/// let shape = Shape::new(id, 3, 72, 17).unwrap();
///
/// let hasher = StaticHasher::new([5, 3, 5, 9], &shape).unwrap();
/// assert_eq!(hasher.size(), 3);
/// let indices: Vec<usize> = hasher.bits(&shape).unwrap().collect();
/// assert_eq!(indices, vec![3, 5, 9]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticHasher {
    /// Ascending, duplicate-free.
    indices: Vec<usize>,
    shape: Shape,
}

impl StaticHasher {
    /// Build from an arbitrary index sequence and its native shape.
    ///
    /// # Errors
    ///
    /// Returns [`BloomSieveError::IndexOutOfBounds`] if any index is
    /// `>= shape.number_of_bits()`. The hasher is not constructed; there is
    /// no partial acceptance of the in-range prefix.
    pub fn new<I>(indices: I, shape: &Shape) -> Result<Self>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut indices: Vec<usize> = indices.into_iter().collect();
        indices.sort_unstable();
        indices.dedup();

        // Sorted, so the last index is the only one that needs checking.
        if let Some(&max) = indices.last() {
            if max >= shape.number_of_bits() {
                return Err(BloomSieveError::index_out_of_bounds(
                    max,
                    shape.number_of_bits(),
                ));
            }
        }

        Ok(Self {
            indices,
            shape: shape.clone(),
        })
    }

    /// Rebuild from another hasher's bit sequence.
    ///
    /// Useful for canonicalizing a [`DynamicHasher`](crate::hashing::DynamicHasher)
    /// (whose traversal may repeat positions) into the sorted deduplicated
    /// form.
    ///
    /// # Errors
    ///
    /// Returns [`BloomSieveError::ShapeMismatch`] if `hasher` cannot
    /// produce bits for `shape`.
    pub fn from_hasher(hasher: &dyn Hasher, shape: &Shape) -> Result<Self> {
        let bits = hasher.bits(shape)?;
        Self::new(bits, shape)
    }

    /// Build from indices already known to be ascending, duplicate-free,
    /// and in range (the form a filter's own bit traversal produces).
    ///
    /// Infallible counterpart of [`StaticHasher::new`] for callers whose
    /// invariants make validation redundant.
    pub(crate) fn from_sorted_distinct(indices: Vec<usize>, shape: &Shape) -> Self {
        debug_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        debug_assert!(indices.last().map_or(true, |&i| i < shape.number_of_bits()));
        Self {
            indices,
            shape: shape.clone(),
        }
    }

    /// The stored indices, ascending and duplicate-free.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }
}

impl Hasher for StaticHasher {
    /// Count of distinct stored indices.
    fn size(&self) -> usize {
        self.indices.len()
    }

    fn bits<'a>(&'a self, shape: &Shape) -> Result<BitIter<'a>> {
        self.shape.require_compatible(shape)?;
        Ok(Box::new(self.indices.iter().copied()))
    }

    fn shape(&self) -> &Shape {
        &self.shape
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::identity::{HashFunctionIdentity, ProcessType, Signedness};

    fn test_shape(signature: u64) -> Shape {
        let id = HashFunctionIdentity::new(
            "test-function",
            "bloomsieve-tests",
            Signedness::Signed,
            ProcessType::Cyclic,
            signature,
        );
        Shape::new(id, 3, 72, 17).unwrap()
    }

    #[test]
    fn stores_sorted_and_deduplicated() {
        let shape = test_shape(0);
        let hasher = StaticHasher::new([9, 3, 5, 3, 9, 0], &shape).unwrap();
        assert_eq!(hasher.indices(), &[0, 3, 5, 9]);
        assert_eq!(hasher.size(), 4);
        assert!(!hasher.is_empty());
    }

    #[test]
    fn empty_input_is_an_empty_hasher() {
        let shape = test_shape(0);
        let hasher = StaticHasher::new([], &shape).unwrap();
        assert!(hasher.is_empty());
        assert_eq!(hasher.size(), 0);
        assert_eq!(hasher.bits(&shape).unwrap().count(), 0);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let shape = test_shape(0);
        assert_eq!(
            StaticHasher::new([0, 72], &shape),
            Err(BloomSieveError::index_out_of_bounds(72, 72))
        );
        // Boundary: the last valid index is fine.
        assert!(StaticHasher::new([71], &shape).is_ok());
    }

    #[test]
    fn bits_rejects_incompatible_shape() {
        let shape = test_shape(0);
        let other = test_shape(1);
        let hasher = StaticHasher::new([1, 2, 3], &shape).unwrap();
        assert!(matches!(
            hasher.bits(&other),
            Err(BloomSieveError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn bits_accepts_compatible_but_unequal_shape() {
        let shape = test_shape(0);
        let id = shape.hash_function_identity().clone();
        // Different item hint, same geometry: compatible.
        let sibling = Shape::new(id, 999, 72, 17).unwrap();
        let hasher = StaticHasher::new([1, 2, 3], &shape).unwrap();
        let collected: Vec<usize> = hasher.bits(&sibling).unwrap().collect();
        assert_eq!(collected, vec![1, 2, 3]);
    }

    #[test]
    fn traversals_are_independent() {
        let shape = test_shape(0);
        let hasher = StaticHasher::new([4, 1, 7], &shape).unwrap();

        let mut first = hasher.bits(&shape).unwrap();
        assert_eq!(first.next(), Some(1));

        // A second traversal starts from the beginning regardless of the
        // first one's position.
        let second: Vec<usize> = hasher.bits(&shape).unwrap().collect();
        assert_eq!(second, vec![1, 4, 7]);

        assert_eq!(first.next(), Some(4));
        assert_eq!(first.next(), Some(7));
        assert_eq!(first.next(), None);
    }

    #[test]
    fn from_hasher_round_trips() {
        let shape = test_shape(0);
        let original = StaticHasher::new([10, 20, 30], &shape).unwrap();
        let copy = StaticHasher::from_hasher(&original, &shape).unwrap();
        assert_eq!(original, copy);
    }
}
