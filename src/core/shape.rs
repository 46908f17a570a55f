//! Filter geometry: the immutable descriptor every other component is
//! measured against.
//!
//! A [`Shape`] fixes the size of the bit universe, the number of hash probes
//! per item, the identity of the hash function that produces those probes,
//! and a sizing hint for the expected item count. Shapes are constructed
//! once, validated once, and never mutated; everything downstream (hashers,
//! filters, serialized payloads) carries or references one.
//!
//! # Compatibility
//!
//! Two shapes are *compatible* (their filters and hashers may interoperate)
//! iff their bit counts, hash function counts, and hash function identities
//! are all equal. The expected item count is descriptive only and does not
//! participate. The whole crate funnels this decision through
//! [`Shape::is_compatible_with`] so there is exactly one definition of it.
//!
//! # Examples
//!
//! ```
//! use bloomsieve::core::{HashFunctionIdentity, ProcessType, Shape, Signedness};
//!
//! let id = HashFunctionIdentity::new(
//!     "test", "docs", Signedness::Signed, ProcessType::Cyclic, 0,
//! );
//! let shape = Shape::new(id, 3, 72, 17).unwrap();
//! assert_eq!(shape.number_of_bits(), 72);
//! assert_eq!(shape.number_of_words(), 2);
//! ```

use crate::core::identity::HashFunctionIdentity;
use crate::error::{BloomSieveError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Immutable geometry + identity descriptor for a Bloom filter.
///
/// Equality and hashing are structural over all four fields, so a `Shape`
/// can serve directly as a compatibility key in maps and sets. Note that
/// equality is stricter than compatibility: two shapes that differ only in
/// `number_of_items` are unequal yet still compatible.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Shape {
    hash_function_identity: HashFunctionIdentity,
    number_of_items: usize,
    number_of_bits: usize,
    number_of_hash_functions: usize,
}

impl Shape {
    /// Create a new shape.
    ///
    /// # Arguments
    ///
    /// * `hash_function_identity` - Identity of the bound hash function
    /// * `number_of_items` - Expected inserted-item count. A sizing hint:
    ///   validated positive, never enforced at runtime.
    /// * `number_of_bits` - Size of the bit universe
    /// * `number_of_hash_functions` - Probes per inserted item
    ///
    /// # Errors
    ///
    /// Returns [`BloomSieveError::InvalidParameters`] if any numeric
    /// argument is zero.
    pub fn new(
        hash_function_identity: HashFunctionIdentity,
        number_of_items: usize,
        number_of_bits: usize,
        number_of_hash_functions: usize,
    ) -> Result<Self> {
        if number_of_items == 0 {
            return Err(BloomSieveError::invalid_parameter(
                "number_of_items",
                number_of_items,
            ));
        }
        if number_of_bits == 0 {
            return Err(BloomSieveError::invalid_parameter(
                "number_of_bits",
                number_of_bits,
            ));
        }
        if number_of_hash_functions == 0 {
            return Err(BloomSieveError::invalid_parameter(
                "number_of_hash_functions",
                number_of_hash_functions,
            ));
        }

        Ok(Self {
            hash_function_identity,
            number_of_items,
            number_of_bits,
            number_of_hash_functions,
        })
    }

    /// Identity of the hash function this shape is bound to.
    #[must_use]
    pub const fn hash_function_identity(&self) -> &HashFunctionIdentity {
        &self.hash_function_identity
    }

    /// Expected number of inserted items (sizing hint only).
    #[must_use]
    pub const fn number_of_items(&self) -> usize {
        self.number_of_items
    }

    /// Size of the bit universe.
    #[must_use]
    pub const fn number_of_bits(&self) -> usize {
        self.number_of_bits
    }

    /// Number of hash probes per inserted item.
    #[must_use]
    pub const fn number_of_hash_functions(&self) -> usize {
        self.number_of_hash_functions
    }

    /// Number of 64-bit words needed to materialize the full bit universe.
    ///
    /// Filters may hold fewer words than this (trailing all-zero words are
    /// never retained) but never more.
    #[must_use]
    pub const fn number_of_words(&self) -> usize {
        (self.number_of_bits + 63) / 64
    }

    /// The single compatibility predicate used by every cross-entity check.
    ///
    /// Compatible means: equal bit counts, equal hash function counts, and
    /// equal hash function identities. `number_of_items` is ignored.
    #[must_use]
    pub fn is_compatible_with(&self, other: &Shape) -> bool {
        self.number_of_bits == other.number_of_bits
            && self.number_of_hash_functions == other.number_of_hash_functions
            && self.hash_function_identity == other.hash_function_identity
    }

    /// Check compatibility, reporting the first disagreeing field on failure.
    ///
    /// Convenience used by filters and hashers to turn the predicate into
    /// the crate's uniform [`BloomSieveError::ShapeMismatch`].
    ///
    /// # Errors
    ///
    /// Returns [`BloomSieveError::ShapeMismatch`] when the shapes are not
    /// compatible.
    pub fn require_compatible(&self, other: &Shape) -> Result<()> {
        if self.number_of_bits != other.number_of_bits {
            return Err(BloomSieveError::shape_mismatch(format!(
                "bit counts differ ({} vs {})",
                self.number_of_bits, other.number_of_bits
            )));
        }
        if self.number_of_hash_functions != other.number_of_hash_functions {
            return Err(BloomSieveError::shape_mismatch(format!(
                "hash function counts differ ({} vs {})",
                self.number_of_hash_functions, other.number_of_hash_functions
            )));
        }
        if self.hash_function_identity != other.hash_function_identity {
            return Err(BloomSieveError::shape_mismatch(format!(
                "hash function identities differ ({} vs {})",
                self.hash_function_identity.name(),
                other.hash_function_identity.name()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::identity::{ProcessType, Signedness};

    fn test_identity(signature: u64) -> HashFunctionIdentity {
        HashFunctionIdentity::new(
            "test-function",
            "bloomsieve-tests",
            Signedness::Signed,
            ProcessType::Cyclic,
            signature,
        )
    }

    #[test]
    fn valid_shape_constructs() {
        let shape = Shape::new(test_identity(0), 3, 72, 17).unwrap();
        assert_eq!(shape.number_of_items(), 3);
        assert_eq!(shape.number_of_bits(), 72);
        assert_eq!(shape.number_of_hash_functions(), 17);
    }

    #[test]
    fn zero_parameters_are_rejected() {
        assert_eq!(
            Shape::new(test_identity(0), 0, 72, 17),
            Err(BloomSieveError::invalid_parameter("number_of_items", 0))
        );
        assert_eq!(
            Shape::new(test_identity(0), 3, 0, 17),
            Err(BloomSieveError::invalid_parameter("number_of_bits", 0))
        );
        assert_eq!(
            Shape::new(test_identity(0), 3, 72, 0),
            Err(BloomSieveError::invalid_parameter(
                "number_of_hash_functions",
                0
            ))
        );
    }

    #[test]
    fn word_count_rounds_up() {
        let shape = Shape::new(test_identity(0), 3, 72, 17).unwrap();
        assert_eq!(shape.number_of_words(), 2);

        let shape = Shape::new(test_identity(0), 3, 64, 17).unwrap();
        assert_eq!(shape.number_of_words(), 1);

        let shape = Shape::new(test_identity(0), 3, 65, 17).unwrap();
        assert_eq!(shape.number_of_words(), 2);
    }

    #[test]
    fn items_do_not_affect_compatibility() {
        let a = Shape::new(test_identity(0), 3, 72, 17).unwrap();
        let b = Shape::new(test_identity(0), 5000, 72, 17).unwrap();
        assert!(a.is_compatible_with(&b));
        assert!(b.is_compatible_with(&a));
        // ... but they do affect equality.
        assert_ne!(a, b);
    }

    #[test]
    fn signature_difference_breaks_compatibility() {
        let a = Shape::new(test_identity(0), 3, 72, 17).unwrap();
        let b = Shape::new(test_identity(1), 3, 72, 17).unwrap();
        assert!(!a.is_compatible_with(&b));
        assert!(matches!(
            a.require_compatible(&b),
            Err(BloomSieveError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn numeric_difference_breaks_compatibility() {
        let a = Shape::new(test_identity(0), 3, 72, 17).unwrap();
        let b = Shape::new(test_identity(0), 3, 128, 17).unwrap();
        let c = Shape::new(test_identity(0), 3, 72, 5).unwrap();
        assert!(!a.is_compatible_with(&b));
        assert!(!a.is_compatible_with(&c));
    }

    #[test]
    fn mismatch_reason_names_the_field() {
        let a = Shape::new(test_identity(0), 3, 72, 17).unwrap();
        let b = Shape::new(test_identity(0), 3, 128, 17).unwrap();
        let err = a.require_compatible(&b).unwrap_err();
        assert!(err.to_string().contains("bit counts"));
    }
}
