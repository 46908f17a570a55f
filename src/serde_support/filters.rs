//! Serde support for the concrete filter variants.
//!
//! Each variant serializes its shape plus its natural contents form: the
//! dense filter its trimmed word array, the sparse filter its index list.
//! Deserialization re-runs the constructors' validation, so payloads that
//! set bits outside the declared shape fail to decode instead of producing
//! a filter that violates its own invariants.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::core::filter::BloomFilter;
use crate::core::hasher::StaticHasher;
use crate::core::shape::Shape;
use crate::filters::{DenseBloomFilter, SparseBloomFilter};

/// Serialization format version, shared by both variants.
const FORMAT_VERSION: u16 = 1;

/// Intermediate wire representation of a dense filter.
#[derive(Serialize, Deserialize)]
struct DenseFilterSerde {
    version: u16,
    shape: Shape,
    words: Vec<u64>,
}

impl Serialize for DenseBloomFilter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        DenseFilterSerde {
            version: FORMAT_VERSION,
            shape: self.shape().clone(),
            words: self.bits(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DenseBloomFilter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = DenseFilterSerde::deserialize(deserializer)?;
        if raw.version != FORMAT_VERSION {
            return Err(de::Error::custom(format!(
                "unsupported filter format version {} (expected {})",
                raw.version, FORMAT_VERSION
            )));
        }
        DenseBloomFilter::from_words(raw.words, &raw.shape).map_err(de::Error::custom)
    }
}

/// Intermediate wire representation of a sparse filter.
#[derive(Serialize, Deserialize)]
struct SparseFilterSerde {
    version: u16,
    shape: Shape,
    indices: Vec<usize>,
}

impl Serialize for SparseBloomFilter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        SparseFilterSerde {
            version: FORMAT_VERSION,
            shape: self.shape().clone(),
            indices: self.hasher().indices().to_vec(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SparseBloomFilter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = SparseFilterSerde::deserialize(deserializer)?;
        if raw.version != FORMAT_VERSION {
            return Err(de::Error::custom(format!(
                "unsupported filter format version {} (expected {})",
                raw.version, FORMAT_VERSION
            )));
        }
        let hasher = StaticHasher::new(raw.indices, &raw.shape).map_err(de::Error::custom)?;
        SparseBloomFilter::from_hasher(&hasher, &raw.shape).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::identity::{HashFunctionIdentity, ProcessType, Signedness};

    fn test_shape() -> Shape {
        let id = HashFunctionIdentity::new(
            "test-function",
            "bloomsieve-tests",
            Signedness::Signed,
            ProcessType::Cyclic,
            0,
        );
        Shape::new(id, 3, 72, 17).unwrap()
    }

    #[test]
    fn dense_json_round_trip() {
        let shape = test_shape();
        let hasher = StaticHasher::new([0, 63, 64], &shape).unwrap();
        let filter = DenseBloomFilter::from_hasher(&hasher, &shape).unwrap();

        let json = serde_json::to_string(&filter).unwrap();
        let restored: DenseBloomFilter = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, filter);
        assert_eq!(restored.bits(), filter.bits());
    }

    #[test]
    fn sparse_bincode_round_trip() {
        let shape = test_shape();
        let hasher = StaticHasher::new(1..=17, &shape).unwrap();
        let filter = SparseBloomFilter::from_hasher(&hasher, &shape).unwrap();

        let bytes = bincode::serialize(&filter).unwrap();
        let restored: SparseBloomFilter = bincode::deserialize(&bytes).unwrap();
        assert_eq!(restored, filter);
    }

    #[test]
    fn empty_filters_serialize_with_empty_contents() {
        let shape = test_shape();
        let filter = DenseBloomFilter::empty(&shape);
        let json = serde_json::to_string(&filter).unwrap();
        assert!(json.contains("\"words\":[]"));

        let restored: DenseBloomFilter = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.cardinality(), 0);
    }

    #[test]
    fn dense_payload_with_out_of_shape_bits_is_rejected() {
        let shape = test_shape();
        let filter = DenseBloomFilter::empty(&shape);
        let json = serde_json::to_string(&filter).unwrap();

        // Two words with bit 72 set: outside the 72-bit universe.
        let corrupted = json.replace("\"words\":[]", "\"words\":[0,256]");
        assert!(serde_json::from_str::<DenseBloomFilter>(&corrupted).is_err());
    }

    #[test]
    fn cross_variant_contents_agree_after_round_trip() {
        let shape = test_shape();
        let hasher = StaticHasher::new([5, 40, 65], &shape).unwrap();
        let dense = DenseBloomFilter::from_hasher(&hasher, &shape).unwrap();
        let sparse = SparseBloomFilter::from_hasher(&hasher, &shape).unwrap();

        let dense_back: DenseBloomFilter =
            serde_json::from_str(&serde_json::to_string(&dense).unwrap()).unwrap();
        let sparse_back: SparseBloomFilter =
            serde_json::from_str(&serde_json::to_string(&sparse).unwrap()).unwrap();

        assert_eq!(dense_back.bits(), sparse_back.bits());
    }
}
