//! Item-backed hasher: buffers raw item bytes, yields probe indices lazily.
//!
//! [`DynamicHasher`] is the producing side of the [`Hasher`] abstraction:
//! feed it items, and `bits` yields, for each buffered item,
//! `number_of_hash_functions` indices reduced into the shape's bit
//! universe. Nothing is deduplicated: distinct items (or even distinct
//! probes of one item) may land on the same position, exactly as a Bloom
//! filter expects. Canonicalize through
//! [`StaticHasher::from_hasher`](crate::core::StaticHasher::from_hasher)
//! when a duplicate-free view is needed.
//!
//! # Examples
//!
//! ```
//! use bloomsieve::core::{BloomFilter, Hasher, Shape};
//! use bloomsieve::filters::DenseBloomFilter;
//! use bloomsieve::hashing::{DynamicHasher, HashFunction, Xxh3Cyclic};
//!
//! let function = Xxh3Cyclic::new();
//! let shape = Shape::new(function.identity().clone(), 1000, 9586, 7).unwrap();
//!
//! let mut hasher = DynamicHasher::new(function, &shape).unwrap();
//! hasher.add(b"alice").add(b"bob");
//!
//! let filter = DenseBloomFilter::from_hasher(&hasher, &shape).unwrap();
//!
//! let mut probe = DynamicHasher::new(Xxh3Cyclic::new(), &shape).unwrap();
//! probe.add(b"alice");
//! assert!(filter.contains_hasher(&probe).unwrap());
//! ```

use crate::core::hasher::{BitIter, Hasher};
use crate::core::shape::Shape;
use crate::error::{BloomSieveError, Result};
use crate::hashing::function::HashFunction;

/// A [`Hasher`] that hashes buffered items on every traversal.
///
/// Holds the items as raw byte buffers; hashing happens lazily inside the
/// iterator `bits` returns, so buffering is cheap and traversals are
/// independent by construction.
#[derive(Debug, Clone)]
pub struct DynamicHasher<F: HashFunction> {
    function: F,
    shape: Shape,
    buffers: Vec<Vec<u8>>,
}

impl<F: HashFunction> DynamicHasher<F> {
    /// Create an empty hasher binding `function` to `shape`.
    ///
    /// # Errors
    ///
    /// Returns [`BloomSieveError::ShapeMismatch`] if `shape` names a
    /// different hash function identity than `function` exposes, since indices
    /// produced by the wrong function must never reach a filter of this
    /// shape.
    pub fn new(function: F, shape: &Shape) -> Result<Self> {
        if function.identity() != shape.hash_function_identity() {
            return Err(BloomSieveError::shape_mismatch(format!(
                "shape is bound to hash function {}, not {}",
                shape.hash_function_identity().name(),
                function.identity().name()
            )));
        }
        Ok(Self {
            function,
            shape: shape.clone(),
            buffers: Vec::new(),
        })
    }

    /// Buffer one item. Returns `&mut self` for chaining.
    pub fn add(&mut self, item: &[u8]) -> &mut Self {
        self.buffers.push(item.to_vec());
        self
    }
}

impl<F: HashFunction> Hasher for DynamicHasher<F> {
    /// Number of buffered items, not the number of distinct bit
    /// positions the traversal will yield.
    fn size(&self) -> usize {
        self.buffers.len()
    }

    fn bits<'a>(&'a self, shape: &Shape) -> Result<BitIter<'a>> {
        self.shape.require_compatible(shape)?;

        let k = self.shape.number_of_hash_functions() as u64;
        let m = self.shape.number_of_bits() as u64;
        Ok(Box::new(self.buffers.iter().flat_map(move |buffer| {
            (0..k).map(move |probe| (self.function.apply(buffer, probe) % m) as usize)
        })))
    }

    fn shape(&self) -> &Shape {
        &self.shape
    }
}
