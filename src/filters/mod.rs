//! Concrete Bloom filter representations.
//!
//! Two variants, one contract:
//!
//! | Filter | Backing | Use when |
//! |--------|---------|----------|
//! | [`DenseBloomFilter`] | packed `u64` words | expected cardinality is a meaningful fraction of `number_of_bits` |
//! | [`SparseBloomFilter`] | ordered index set | `number_of_bits` is large relative to expected cardinality |
//!
//! Both implement [`BloomFilter`](crate::core::BloomFilter) and expose the
//! same trimmed word form through `bits()`, so they merge with, compare
//! against, and contain each other across compatible shapes. The
//! conformance suite under `tests/` runs the full contract against each
//! variant through the same battery.

pub mod dense;
pub mod sparse;

pub use dense::DenseBloomFilter;
pub use sparse::SparseBloomFilter;
