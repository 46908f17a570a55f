//! Serde support for [`StaticHasher`].
//!
//! The wire form carries a format version, the native shape, and the
//! stored indices. Deserialization funnels through
//! [`StaticHasher::new`], so a corrupt or hand-edited payload is rejected
//! with the same out-of-range error construction would raise; it cannot
//! materialize a hasher whose indices escape its shape.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::core::hasher::{Hasher, StaticHasher};
use crate::core::shape::Shape;

/// Serialization format version.
const FORMAT_VERSION: u16 = 1;

/// Intermediate wire representation.
#[derive(Serialize, Deserialize)]
struct StaticHasherSerde {
    version: u16,
    shape: Shape,
    indices: Vec<usize>,
}

impl Serialize for StaticHasher {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        StaticHasherSerde {
            version: FORMAT_VERSION,
            shape: self.shape().clone(),
            indices: self.indices().to_vec(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for StaticHasher {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = StaticHasherSerde::deserialize(deserializer)?;
        if raw.version != FORMAT_VERSION {
            return Err(de::Error::custom(format!(
                "unsupported StaticHasher format version {} (expected {})",
                raw.version, FORMAT_VERSION
            )));
        }
        StaticHasher::new(raw.indices, &raw.shape).map_err(de::Error::custom)
    }
}
