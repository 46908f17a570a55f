//! Serde serialization for shapes, hashers, and filters (feature = "serde").
//!
//! [`HashFunctionIdentity`](crate::core::HashFunctionIdentity) and
//! [`Shape`](crate::core::Shape) derive their impls directly; they are
//! plain values whose fields need no cross-validation. The types with
//! invariants ([`StaticHasher`](crate::core::StaticHasher) and the two
//! filter variants) get hand-written impls here that route decoding back
//! through their validating constructors and check a format version first.
//!
//! The payload works with any serde format; the test suites exercise JSON
//! and bincode.

mod filters;
mod static_hasher;
