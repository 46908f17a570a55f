//! XXH3-64 hash functions, in cyclic and iterative flavors.
//!
//! Both wrap the `xxhash-rust` XXH3 implementation, which selects SIMD
//! paths at runtime and passes SMHasher cleanly: plenty for Bloom filter
//! probing, where distribution quality matters and cryptographic strength
//! does not.
//!
//! # Cyclic vs. iterative
//!
//! [`Xxh3Cyclic`] hashes each item twice and derives probe `i` as
//! `h1 + i * h2` (the Kirsch–Mitzenmacher construction): two strong hashes
//! buy `k` statistically adequate probes at increment cost. [`Xxh3Iterative`]
//! re-hashes the item with the probe number as seed, `k` full hashes per
//! item, maximally independent probes. The cyclic form is the practical
//! default; the iterative one exists for workloads that want no correlation
//! between probes at any price.
//!
//! # Identity signatures
//!
//! Each function computes its own identity signature by hashing its
//! canonical identity buffer (`"name provider signedness process"`) with
//! itself at probe 0. Functions wired the same way therefore agree on their
//! signature across processes and versions, and any change to the wiring
//! shows up as a signature change, which the shape compatibility rules
//! then treat as a different function.
//!
//! # Examples
//!
//! ```
//! use bloomsieve::hashing::{HashFunction, Xxh3Cyclic};
//!
//! let f = Xxh3Cyclic::new();
//! let h0 = f.apply(b"item", 0);
//! let h1 = f.apply(b"item", 1);
//! assert_ne!(h0, h1);
//! assert_eq!(h0, Xxh3Cyclic::new().apply(b"item", 0)); // deterministic
//! ```

use xxhash_rust::xxh3::{xxh3_64, xxh3_64_with_seed};

use crate::core::identity::{HashFunctionIdentity, ProcessType, Signedness};
use crate::hashing::function::HashFunction;

/// Seed for the second base hash of the cyclic construction.
const INCREMENT_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

/// Canonical buffer a function signs to produce its identity signature.
fn signature_buffer(
    name: &str,
    provider: &str,
    signedness: Signedness,
    process_type: ProcessType,
) -> Vec<u8> {
    format!("{} {} {:?} {:?}", name, provider, signedness, process_type).into_bytes()
}

/// XXH3-64 with cyclic probe derivation.
#[derive(Debug, Clone)]
pub struct Xxh3Cyclic {
    identity: HashFunctionIdentity,
}

impl Xxh3Cyclic {
    const NAME: &'static str = "xxh3-cyclic";
    const PROVIDER: &'static str = "bloomsieve";

    /// Create the function and compute its self-signed identity.
    #[must_use]
    pub fn new() -> Self {
        let buffer = signature_buffer(
            Self::NAME,
            Self::PROVIDER,
            Signedness::Unsigned,
            ProcessType::Cyclic,
        );
        let signature = cyclic_apply(&buffer, 0);
        Self {
            identity: HashFunctionIdentity::new(
                Self::NAME,
                Self::PROVIDER,
                Signedness::Unsigned,
                ProcessType::Cyclic,
                signature,
            ),
        }
    }
}

impl Default for Xxh3Cyclic {
    fn default() -> Self {
        Self::new()
    }
}

/// `h1 + probe * h2`, with the increment forced odd so a degenerate zero
/// increment cannot collapse all probes onto one position.
fn cyclic_apply(bytes: &[u8], probe: u64) -> u64 {
    let h1 = xxh3_64(bytes);
    let h2 = xxh3_64_with_seed(bytes, INCREMENT_SEED) | 1;
    h1.wrapping_add(probe.wrapping_mul(h2))
}

impl HashFunction for Xxh3Cyclic {
    fn identity(&self) -> &HashFunctionIdentity {
        &self.identity
    }

    fn apply(&self, bytes: &[u8], probe: u64) -> u64 {
        cyclic_apply(bytes, probe)
    }
}

/// XXH3-64 with one independent seeded hash per probe.
#[derive(Debug, Clone)]
pub struct Xxh3Iterative {
    identity: HashFunctionIdentity,
}

impl Xxh3Iterative {
    const NAME: &'static str = "xxh3-iterative";
    const PROVIDER: &'static str = "bloomsieve";

    /// Create the function and compute its self-signed identity.
    #[must_use]
    pub fn new() -> Self {
        let buffer = signature_buffer(
            Self::NAME,
            Self::PROVIDER,
            Signedness::Unsigned,
            ProcessType::Iterative,
        );
        let signature = xxh3_64_with_seed(&buffer, 0);
        Self {
            identity: HashFunctionIdentity::new(
                Self::NAME,
                Self::PROVIDER,
                Signedness::Unsigned,
                ProcessType::Iterative,
                signature,
            ),
        }
    }
}

impl Default for Xxh3Iterative {
    fn default() -> Self {
        Self::new()
    }
}

impl HashFunction for Xxh3Iterative {
    fn identity(&self) -> &HashFunctionIdentity {
        &self.identity
    }

    fn apply(&self, bytes: &[u8], probe: u64) -> u64 {
        xxh3_64_with_seed(bytes, probe)
    }
}
