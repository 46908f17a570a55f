//! Core types and traits: geometry, identity, hashers, and the filter
//! contract.
//!
//! # Module Organization
//!
//! ```text
//! core/
//! ├── identity.rs  - HashFunctionIdentity and its enums
//! ├── shape.rs     - Shape and the compatibility predicate
//! ├── hasher.rs    - Hasher trait + StaticHasher
//! ├── bitvec.rs    - packed-word bit storage
//! ├── filter.rs    - BloomFilter trait
//! └── mod.rs       - this file (public API)
//! ```
//!
//! Dependency order runs leaves-first: `identity` and `shape` are pure
//! values, `hasher` consumes shapes, `filter` consumes both. Concrete
//! filter variants live in [`crate::filters`].

pub mod bitvec;
pub mod filter;
pub mod hasher;
pub mod identity;
pub mod shape;

pub use bitvec::BitVec;
pub use filter::BloomFilter;
pub use hasher::{BitIter, Hasher, StaticHasher};
pub use identity::{HashFunctionIdentity, ProcessType, Signedness};
pub use shape::Shape;
