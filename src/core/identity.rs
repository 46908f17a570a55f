//! Hash function identity: the value contract that binds a shape to the
//! function that produced its bit indices.
//!
//! Two filters may only interoperate when they were populated by the *same*
//! hash function. Function implementations live outside the core (see
//! [`crate::hashing`] for the ones this crate ships), so the core identifies
//! them by value: a name, a provider, how the function treats sign, how it
//! derives repeated probes, and a 64-bit signature. The signature is the
//! decisive discriminator: two identities that agree on every descriptive
//! field but differ in signature are different functions.
//!
//! # Examples
//!
//! ```
//! use bloomsieve::core::{HashFunctionIdentity, ProcessType, Signedness};
//!
//! let id = HashFunctionIdentity::new(
//!     "xxh3-cyclic",
//!     "bloomsieve",
//!     Signedness::Unsigned,
//!     ProcessType::Cyclic,
//!     0x9e37_79b9_7f4a_7c15,
//! );
//! assert_eq!(id.name(), "xxh3-cyclic");
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whether a hash function's output is interpreted as signed or unsigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Signedness {
    /// Output interpreted as a signed 64-bit value.
    Signed,
    /// Output interpreted as an unsigned 64-bit value.
    Unsigned,
}

/// How a hash function derives repeated probes for one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ProcessType {
    /// Probes are derived cyclically from a single seed hash (e.g. the
    /// `h1 + i * h2` family). One strong hash, cheap increments.
    Cyclic,
    /// Each probe is an independent hash of the item with a distinct seed.
    Iterative,
}

/// Identity of a hash function.
///
/// A read-only value type; the core never constructs identities for real
/// functions, it only compares them. Equality is structural over all five
/// fields, which makes the identity usable directly as part of a shape
/// compatibility key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HashFunctionIdentity {
    name: String,
    provider: String,
    signedness: Signedness,
    process_type: ProcessType,
    signature: u64,
}

impl HashFunctionIdentity {
    /// Create a new identity.
    ///
    /// # Arguments
    ///
    /// * `name` - Common name of the hash function (e.g. `"xxh3-cyclic"`)
    /// * `provider` - Who supplies the implementation
    /// * `signedness` - Sign interpretation of the output
    /// * `process_type` - How repeated probes are derived
    /// * `signature` - 64-bit fingerprint distinguishing otherwise
    ///   identical-looking identities
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        provider: impl Into<String>,
        signedness: Signedness,
        process_type: ProcessType,
        signature: u64,
    ) -> Self {
        Self {
            name: name.into(),
            provider: provider.into(),
            signedness,
            process_type,
            signature,
        }
    }

    /// Common name of the hash function.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Provider of the implementation.
    #[must_use]
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Sign interpretation of the function's output.
    #[must_use]
    pub const fn signedness(&self) -> Signedness {
        self.signedness
    }

    /// Probe derivation process.
    #[must_use]
    pub const fn process_type(&self) -> ProcessType {
        self.process_type
    }

    /// 64-bit fingerprint of the function.
    #[must_use]
    pub const fn signature(&self) -> u64 {
        self.signature
    }
}
