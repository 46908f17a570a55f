//! Item hashing: the producing side of the [`Hasher`](crate::core::Hasher)
//! abstraction.
//!
//! The core consumes bit index sequences without caring where they came
//! from; this module is where they come from. A [`HashFunction`] maps
//! `(item bytes, probe number)` to a 64-bit hash and carries the
//! [`HashFunctionIdentity`](crate::core::HashFunctionIdentity) that shapes
//! record; a [`DynamicHasher`] buffers items and reduces their probe hashes
//! into a shape's bit universe on traversal.
//!
//! Two XXH3-backed functions ship here: [`Xxh3Cyclic`] (one base hash
//! pair, probes derived by increment; the practical default) and
//! [`Xxh3Iterative`] (an independent seeded hash per probe).

pub mod dynamic;
pub mod function;
pub mod xxh3;

pub use dynamic::DynamicHasher;
pub use function::HashFunction;
pub use xxh3::{Xxh3Cyclic, Xxh3Iterative};
