//! BloomSieve: shape-bound Bloom filters with interchangeable backing
//! representations.
//!
//! A Bloom filter answers approximate set-membership queries with no false
//! negatives and a bounded false-positive rate: the cheap in-memory test
//! that lets you skip an expensive exact lookup (disk read, network round
//! trip) when absence can be proven. BloomSieve implements the filter core
//! around an explicit geometric contract:
//!
//! - [`Shape`] pins a filter's geometry: bit universe size, probes per
//!   item, and the identity of the hash function that produces them. Every
//!   cross-filter operation checks shape *compatibility* first; filters of
//!   incompatible shapes never silently mix.
//! - [`Hasher`](crate::core::Hasher) turns "what should be in the filter" into a
//!   deterministic sequence of bit positions for a shape.
//!   [`StaticHasher`](crate::core::StaticHasher) is the canonical fixed-index
//!   form every filter converts to and from;
//!   [`DynamicHasher`](crate::hashing::DynamicHasher) hashes raw item bytes with
//!   the XXH3-backed functions in [`hashing`](crate::hashing).
//! - [`BloomFilter`](crate::core::BloomFilter) is the filter contract: merge,
//!   set-algebra cardinalities (or/and/xor), containment, fullness, and
//!   conversion back to a `StaticHasher`, all defined over observable bit
//!   state, never storage. Two representations ship:
//!   [`DenseBloomFilter`](crate::filters::DenseBloomFilter) (packed words) and
//!   [`SparseBloomFilter`](crate::filters::SparseBloomFilter) (explicit index
//!   set), fully interoperable across compatible shapes.
//!
//! # Quick Start
//!
//! ```
//! use bloomsieve::core::{BloomFilter, Shape};
//! use bloomsieve::filters::DenseBloomFilter;
//! use bloomsieve::hashing::{DynamicHasher, HashFunction, Xxh3Cyclic};
//!
//! # fn main() -> bloomsieve::Result<()> {
//! // Geometry is supplied, not derived: 9586 bits, 7 probes per item,
//! // sized for about 1000 items.
//! let function = Xxh3Cyclic::new();
//! let shape = Shape::new(function.identity().clone(), 1000, 9586, 7)?;
//!
//! // Hash items into a filter.
//! let mut hasher = DynamicHasher::new(function, &shape)?;
//! hasher.add(b"alice").add(b"bob");
//! let filter = DenseBloomFilter::from_hasher(&hasher, &shape)?;
//!
//! // Membership: "maybe present" or "definitely absent".
//! let mut probe = DynamicHasher::new(Xxh3Cyclic::new(), &shape)?;
//! probe.add(b"alice");
//! assert!(filter.contains_hasher(&probe)?);
//! # Ok(())
//! # }
//! ```
//!
//! # Comparing filters
//!
//! ```
//! use bloomsieve::core::{BloomFilter, StaticHasher};
//! use bloomsieve::filters::{DenseBloomFilter, SparseBloomFilter};
//! # use bloomsieve::core::{HashFunctionIdentity, ProcessType, Shape, Signedness};
//!
//! # fn main() -> bloomsieve::Result<()> {
//! # let id = HashFunctionIdentity::new("t", "docs", Signedness::Signed, ProcessType::Cyclic, 0);
//! # let shape = Shape::new(id, 3, 72, 17)?;
//! let a = DenseBloomFilter::from_hasher(&StaticHasher::new(1..=17, &shape)?, &shape)?;
//! let b = SparseBloomFilter::from_hasher(&StaticHasher::new(11..=27, &shape)?, &shape)?;
//!
//! // Set algebra over the bit vectors, without mutation:
//! assert_eq!(a.or_cardinality(&b)?, 27);
//! assert_eq!(a.and_cardinality(&b)?, 7);
//! assert_eq!(a.xor_cardinality(&b)?, 20);
//! # Ok(())
//! # }
//! ```
//!
//! # The word form
//!
//! `bits()` exposes filter state as packed 64-bit words, low bit = lowest
//! index, trimmed of trailing all-zero words; an all-clear filter yields
//! an empty vector. This is the crate's only wire format; treat missing
//! high words as zero.
//!
//! # Concurrency
//!
//! Single-threaded value semantics throughout: `merge`/`merge_hasher` are
//! the only mutators and take `&mut self`; reads are pure. Nothing blocks,
//! suspends, or synchronizes internally. Wrap a filter in a lock if you
//! need shared mutation.
//!
//! # Feature Flags
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `serde` | `Serialize`/`Deserialize` for shapes, hashers, and filters |

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod core;
pub mod error;
pub mod filters;
pub mod hashing;
pub mod util;

#[cfg(feature = "serde")]
mod serde_support;

pub use crate::core::{BloomFilter, Hasher, Shape, StaticHasher};
pub use crate::error::{BloomSieveError, Result};

#[cfg(test)]
mod tests {
    use crate::core::{BloomFilter, Shape, StaticHasher};
    use crate::filters::{DenseBloomFilter, SparseBloomFilter};
    use crate::hashing::{DynamicHasher, HashFunction, Xxh3Cyclic};

    #[test]
    fn end_to_end_item_pipeline() {
        let function = Xxh3Cyclic::new();
        let shape = Shape::new(function.identity().clone(), 1000, 9586, 7).unwrap();

        let mut hasher = DynamicHasher::new(function, &shape).unwrap();
        for item in [&b"alpha"[..], b"beta", b"gamma"] {
            hasher.add(item);
        }

        let filter = DenseBloomFilter::from_hasher(&hasher, &shape).unwrap();
        assert!(filter.cardinality() > 0);
        assert!(filter.cardinality() <= 21); // 3 items x 7 probes, duplicates possible

        // Every inserted item must report "maybe present".
        for item in [&b"alpha"[..], b"beta", b"gamma"] {
            let mut probe = DynamicHasher::new(Xxh3Cyclic::new(), &shape).unwrap();
            probe.add(item);
            assert!(filter.contains_hasher(&probe).unwrap());
        }
    }

    #[test]
    fn representations_agree_through_the_canonical_hasher() {
        let function = Xxh3Cyclic::new();
        let shape = Shape::new(function.identity().clone(), 100, 2048, 5).unwrap();

        let mut hasher = DynamicHasher::new(function, &shape).unwrap();
        for i in 0..50u32 {
            hasher.add(&i.to_le_bytes());
        }

        let dense = DenseBloomFilter::from_hasher(&hasher, &shape).unwrap();
        let sparse = SparseBloomFilter::from_hasher(&hasher, &shape).unwrap();

        assert_eq!(dense.bits(), sparse.bits());
        assert_eq!(dense.hasher(), sparse.hasher());
        assert_eq!(dense.cardinality(), sparse.cardinality());
        assert!(dense.contains(&sparse).unwrap());
        assert!(sparse.contains(&dense).unwrap());
    }

    #[test]
    fn static_hasher_is_the_round_trip_currency() {
        let function = Xxh3Cyclic::new();
        let shape = Shape::new(function.identity().clone(), 100, 2048, 5).unwrap();

        let mut hasher = DynamicHasher::new(function, &shape).unwrap();
        hasher.add(b"payload");

        // Canonicalize the dynamic stream, then rebuild through it.
        let canonical = StaticHasher::from_hasher(&hasher, &shape).unwrap();
        let direct = DenseBloomFilter::from_hasher(&hasher, &shape).unwrap();
        let rebuilt = DenseBloomFilter::from_hasher(&canonical, &shape).unwrap();
        assert_eq!(direct.bits(), rebuilt.bits());
    }

    #[test]
    fn merge_accumulates_across_item_batches() {
        let function = Xxh3Cyclic::new();
        let shape = Shape::new(function.identity().clone(), 1000, 9586, 7).unwrap();

        let mut morning = DynamicHasher::new(Xxh3Cyclic::new(), &shape).unwrap();
        morning.add(b"session-1").add(b"session-2");
        let mut evening = DynamicHasher::new(Xxh3Cyclic::new(), &shape).unwrap();
        evening.add(b"session-3");

        let mut filter = DenseBloomFilter::from_hasher(&morning, &shape).unwrap();
        let before = filter.cardinality();
        filter.merge_hasher(&evening).unwrap();
        assert!(filter.cardinality() >= before);

        let mut probe = DynamicHasher::new(function, &shape).unwrap();
        probe.add(b"session-3");
        assert!(filter.contains_hasher(&probe).unwrap());
    }
}
