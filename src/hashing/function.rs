//! The hash function contract: items in, probe values out.
//!
//! A [`HashFunction`] is the boundary between raw item bytes and the
//! shape-bound index sequences the core consumes. Each implementation
//! exposes exactly one [`HashFunctionIdentity`]; shapes record that
//! identity, and the compatibility rules guarantee a filter is only ever
//! fed indices produced by the function its shape names.

use crate::core::identity::HashFunctionIdentity;

/// A hash function usable to drive a
/// [`DynamicHasher`](crate::hashing::DynamicHasher).
///
/// # Contract
///
/// - `apply` is deterministic: the same `(bytes, probe)` pair always
///   produces the same value, across calls and across processes.
/// - Probes should be statistically independent across `probe` values; how
///   that independence is achieved (cyclic derivation from one base hash,
///   or an independent seeded hash per probe) is declared by the
///   identity's [`ProcessType`](crate::core::ProcessType).
/// - The returned value is a full-width hash. Reduction into a shape's
///   bit universe is the caller's job; functions never truncate or clamp.
pub trait HashFunction {
    /// The identity of this function, as recorded in shapes bound to it.
    fn identity(&self) -> &HashFunctionIdentity;

    /// Hash `bytes` for the given probe number.
    ///
    /// Probe numbers start at 0 and are dense: a filter with `k` hash
    /// functions uses probes `0..k`.
    fn apply(&self, bytes: &[u8], probe: u64) -> u64;
}
