//! Packed-word bit vector with lazy, trimmed storage.
//!
//! `BitVec` backs the dense filter representation. Bits are packed into
//! 64-bit words in little-endian bit order:
//!
//! ```text
//! Word 0: [bit 0][bit 1]...[bit 63]
//! Word 1: [bit 64][bit 65]...[bit 127]
//! ```
//!
//! # Materialization
//!
//! Unlike a fixed-size bit array, storage here tracks the highest set bit,
//! not the nominal universe: a fresh vector owns zero words, and `set`
//! extends the word array only as far as the touched word. Trailing
//! all-zero high words are never retained, so [`BitVec::words`] is exactly
//! the trimmed serialized form the filter contract exposes: length
//! `ceil((highest_set_bit + 1) / 64)`, or zero when nothing is set.
//!
//! Single-threaded by design: mutation takes `&mut self` and there is no
//! internal synchronization. Callers needing shared mutation serialize it
//! themselves.
//!
//! # Examples
//!
//! ```
//! use bloomsieve::core::BitVec;
//!
//! let mut bv = BitVec::new(72);
//! assert!(bv.words().is_empty());
//!
//! bv.set(0);
//! bv.set(16);
//! assert_eq!(bv.words(), &[0x1_0001]);
//! assert!(bv.get(16));
//! assert!(!bv.get(17));
//! assert_eq!(bv.count_ones(), 2);
//! ```

use crate::error::{BloomSieveError, Result};

/// Growable packed bit vector over a fixed bit universe.
///
/// The universe size bounds which indices are addressable; the word array
/// holds only as many words as the highest set bit requires.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BitVec {
    /// Packed words; the last word, when present, is nonzero.
    words: Vec<u64>,
    /// Number of addressable bits.
    bits: usize,
}

impl BitVec {
    /// Create an all-clear vector addressing `bits` positions.
    ///
    /// No storage is allocated until the first `set`.
    #[must_use]
    pub const fn new(bits: usize) -> Self {
        Self {
            words: Vec::new(),
            bits,
        }
    }

    /// Reconstruct from packed words (deserialization path).
    ///
    /// Trailing zero words in `words` are trimmed rather than rejected;
    /// consumers of the wire form must treat "shorter than expected" as
    /// "remaining high bits are zero".
    ///
    /// # Errors
    ///
    /// Returns [`BloomSieveError::IndexOutOfBounds`] if any set bit lies at
    /// or beyond `bits`.
    pub fn from_words(mut words: Vec<u64>, bits: usize) -> Result<Self> {
        while words.last() == Some(&0) {
            words.pop();
        }

        if let Some(&last) = words.last() {
            let highest = (words.len() - 1) * 64 + (63 - last.leading_zeros() as usize);
            if highest >= bits {
                return Err(BloomSieveError::index_out_of_bounds(highest, bits));
            }
        }

        Ok(Self { words, bits })
    }

    /// Number of addressable bits.
    #[must_use]
    #[inline]
    pub const fn bit_capacity(&self) -> usize {
        self.bits
    }

    /// Set the bit at `index`.
    ///
    /// Extends the word array if `index` lies beyond the currently
    /// materialized words. Idempotent.
    ///
    /// # Panics
    ///
    /// Panics if `index >= bit_capacity()`. Callers validate indices
    /// against a shape before they reach storage, so an out-of-range index
    /// here is a bug, not an input error.
    #[inline]
    pub fn set(&mut self, index: usize) {
        assert!(
            index < self.bits,
            "BitVec index out of bounds: index={} bits={}",
            index,
            self.bits
        );

        let word_idx = index / 64;
        if word_idx >= self.words.len() {
            self.words.resize(word_idx + 1, 0);
        }
        self.words[word_idx] |= 1u64 << (index % 64);
    }

    /// Get the bit at `index`.
    ///
    /// Indices beyond the materialized words read as zero.
    ///
    /// # Panics
    ///
    /// Panics if `index >= bit_capacity()`.
    #[must_use]
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        assert!(
            index < self.bits,
            "BitVec index out of bounds: index={} bits={}",
            index,
            self.bits
        );

        let word_idx = index / 64;
        match self.words.get(word_idx) {
            Some(word) => (word >> (index % 64)) & 1 == 1,
            None => false,
        }
    }

    /// The packed words, trimmed of trailing zeros.
    ///
    /// An all-clear vector yields an empty slice, not a zero-filled one.
    #[must_use]
    #[inline]
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Population count across the materialized words.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// OR another trimmed word array into this vector in place.
    ///
    /// Extends storage to cover `other` when it reaches into higher words
    /// than currently materialized. `other` must itself be trimmed and must
    /// fit this vector's universe; both hold for words produced by any
    /// filter sharing a compatible shape.
    pub fn or_words(&mut self, other: &[u64]) {
        debug_assert!(other.last() != Some(&0), "or_words: untrimmed operand");
        debug_assert!(
            other.len() * 64 <= (self.bits + 63) / 64 * 64,
            "or_words: operand exceeds bit universe"
        );

        if other.len() > self.words.len() {
            self.words.resize(other.len(), 0);
        }
        for (dst, src) in self.words.iter_mut().zip(other) {
            *dst |= src;
        }
    }

    /// Iterate the indices of set bits in ascending order.
    pub fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(word_idx, &word)| {
            (0..64)
                .filter(move |bit| (word >> bit) & 1 == 1)
                .map(move |bit| word_idx * 64 + bit)
        })
    }
}
