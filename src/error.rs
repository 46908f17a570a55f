//! Error types for BloomSieve operations.
//!
//! Every fallible operation in the crate reports through [`BloomSieveError`].
//! All three variants are contract violations surfaced synchronously at the
//! offending call: there is no retry path, no partial application (a failed
//! operation leaves its receiver untouched), and no silent coercion such as
//! truncating an out-of-range index.
//!
//! # Error Propagation
//!
//! ```
//! use bloomsieve::{Result, Shape};
//! use bloomsieve::hashing::{HashFunction, Xxh3Cyclic};
//!
//! fn make_shape(bits: usize, hashes: usize) -> Result<Shape> {
//!     let shape = Shape::new(Xxh3Cyclic::new().identity().clone(), 1000, bits, hashes)?;
//!     Ok(shape)
//! }
//! # assert!(make_shape(72, 17).is_ok());
//! # assert!(make_shape(0, 17).is_err());
//! ```

use std::fmt;

/// Result type alias for BloomSieve operations.
///
/// All fallible operations return [`Result<T>`] where the error type is
/// [`BloomSieveError`].
pub type Result<T> = std::result::Result<T, BloomSieveError>;

/// Errors that can occur during Bloom filter construction and use.
///
/// # Design Notes
/// - `Clone` + `PartialEq` enable testing and error comparison
/// - Struct variants carry enough context to diagnose the violation without
///   re-deriving it from call-site state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BloomSieveError {
    /// A [`Shape`](crate::core::Shape) was constructed with a non-positive
    /// numeric field.
    ///
    /// All three numeric shape parameters (items, bits, hash functions) must
    /// be strictly positive; a zero in any of them describes a filter that
    /// cannot hold or probe anything.
    InvalidParameters {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// The rejected value.
        value: usize,
    },

    /// A bit index at or beyond the shape's bit universe.
    ///
    /// Raised when a [`StaticHasher`](crate::core::StaticHasher) is built
    /// from an index `>= number_of_bits` for its declared shape, or when a
    /// serialized filter decodes to such an index.
    IndexOutOfBounds {
        /// The invalid index.
        index: usize,
        /// Size of the bit universe the index was checked against.
        bits: usize,
    },

    /// Two shapes that must interoperate are not compatible.
    ///
    /// Raised by every cross-entity operation: construction from a hasher,
    /// `merge`, `contains`, the `*_cardinality` family, and
    /// `Hasher::bits`. Shapes are compatible iff their bit counts, hash
    /// function counts, and hash function identities all match; a different
    /// identity signature alone is a mismatch even when the numeric
    /// parameters agree.
    ShapeMismatch {
        /// Description of which part of the shapes disagreed.
        reason: String,
    },

    /// Serialized data failed validation during decode.
    ///
    /// Deserialization re-checks the same invariants construction enforces,
    /// so a corrupt or hand-edited payload cannot materialize a value that
    /// violates them.
    #[cfg(feature = "serde")]
    SerializationError {
        /// Description of what failed.
        message: String,
    },
}

impl fmt::Display for BloomSieveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameters { parameter, value } => {
                write!(
                    f,
                    "Invalid shape parameter: {} = {}. Must be greater than 0.",
                    parameter, value
                )
            }
            Self::IndexOutOfBounds { index, bits } => {
                write!(
                    f,
                    "Bit index {} out of bounds for a shape of {} bits.",
                    index, bits
                )
            }
            Self::ShapeMismatch { reason } => {
                write!(f, "Cannot operate across incompatible shapes: {}.", reason)
            }
            #[cfg(feature = "serde")]
            Self::SerializationError { message } => {
                write!(f, "Serialization error: {}.", message)
            }
        }
    }
}

impl std::error::Error for BloomSieveError {}

impl BloomSieveError {
    /// Create an `InvalidParameters` error for a named shape field.
    #[must_use]
    pub fn invalid_parameter(parameter: &'static str, value: usize) -> Self {
        Self::InvalidParameters { parameter, value }
    }

    /// Create an `IndexOutOfBounds` error.
    #[must_use]
    pub fn index_out_of_bounds(index: usize, bits: usize) -> Self {
        Self::IndexOutOfBounds { index, bits }
    }

    /// Create a `ShapeMismatch` error with a formatted reason.
    #[must_use]
    pub fn shape_mismatch(reason: impl Into<String>) -> Self {
        Self::ShapeMismatch {
            reason: reason.into(),
        }
    }

    /// Create a `SerializationError`.
    #[cfg(feature = "serde")]
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_name_the_violation() {
        let err = BloomSieveError::invalid_parameter("number_of_bits", 0);
        assert!(err.to_string().contains("number_of_bits"));

        let err = BloomSieveError::index_out_of_bounds(72, 72);
        assert!(err.to_string().contains("72"));

        let err = BloomSieveError::shape_mismatch("hash function identity differs");
        assert!(err.to_string().contains("identity"));
    }

    #[test]
    fn errors_are_comparable() {
        assert_eq!(
            BloomSieveError::index_out_of_bounds(5, 4),
            BloomSieveError::index_out_of_bounds(5, 4)
        );
        assert_ne!(
            BloomSieveError::index_out_of_bounds(5, 4),
            BloomSieveError::index_out_of_bounds(6, 4)
        );
    }

    #[test]
    fn error_trait_object_is_usable() {
        let err: Box<dyn std::error::Error> =
            Box::new(BloomSieveError::invalid_parameter("number_of_items", 0));
        assert!(err.source().is_none());
    }
}
