//! Word-slice bit operations for trimmed packed arrays.
//!
//! All functions here operate on the trimmed word form filters expose:
//! arrays of 64-bit words with no trailing zeros, where two arrays of
//! different lengths are compared as if the shorter one were zero-extended.
//! That convention is what lets two filters over the same shape interoperate
//! even when their materialized storage lengths differ.
//!
//! Population counting compiles to the `POPCNT` instruction via
//! `u64::count_ones` on modern targets.

/// Population count of a word slice.
///
/// # Examples
///
/// ```
/// use bloomsieve::util::bitops::pop_count;
///
/// assert_eq!(pop_count(&[]), 0);
/// assert_eq!(pop_count(&[0b1010, 0b1]), 3);
/// ```
#[must_use]
pub fn pop_count(words: &[u64]) -> usize {
    words.iter().map(|w| w.count_ones() as usize).sum()
}

/// Population count of the bitwise OR of two trimmed word slices.
///
/// Words beyond the shorter slice contribute unchanged from the longer one.
#[must_use]
pub fn or_cardinality(a: &[u64], b: &[u64]) -> usize {
    let common = a.len().min(b.len());
    let mut count = 0usize;
    for i in 0..common {
        count += (a[i] | b[i]).count_ones() as usize;
    }
    count + pop_count(&a[common..]) + pop_count(&b[common..])
}

/// Population count of the bitwise AND of two trimmed word slices.
///
/// Words present in only one slice contribute nothing.
#[must_use]
pub fn and_cardinality(a: &[u64], b: &[u64]) -> usize {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x & y).count_ones() as usize)
        .sum()
}

/// Population count of the bitwise XOR of two trimmed word slices.
///
/// Equal by construction to `or_cardinality(a, b) - and_cardinality(a, b)`.
#[must_use]
pub fn xor_cardinality(a: &[u64], b: &[u64]) -> usize {
    let common = a.len().min(b.len());
    let mut count = 0usize;
    for i in 0..common {
        count += (a[i] ^ b[i]).count_ones() as usize;
    }
    count + pop_count(&a[common..]) + pop_count(&b[common..])
}

/// Subset test over trimmed word slices: every bit set in `inner` is also
/// set in `outer`.
///
/// Not symmetric. An empty `inner` is contained in everything.
#[must_use]
pub fn contains_all(outer: &[u64], inner: &[u64]) -> bool {
    if inner.len() > outer.len() {
        // Trimmed form: the extra high words of `inner` hold at least one
        // set bit that `outer` cannot have.
        return false;
    }
    inner.iter().zip(outer).all(|(i, o)| i & !o == 0)
}

/// Ascending indices of the set bits in a trimmed word slice.
pub fn indices_of(words: &[u64]) -> impl Iterator<Item = usize> + '_ {
    words.iter().enumerate().flat_map(|(word_idx, &word)| {
        (0..64)
            .filter(move |bit| (word >> bit) & 1 == 1)
            .map(move |bit| word_idx * 64 + bit)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_count_basics() {
        assert_eq!(pop_count(&[]), 0);
        assert_eq!(pop_count(&[u64::MAX]), 64);
        assert_eq!(pop_count(&[0x1FFFF]), 17);
    }

    #[test]
    fn or_with_unequal_lengths() {
        // a = {0}, b = {0, 64}: union is {0, 64}.
        assert_eq!(or_cardinality(&[1], &[1, 1]), 2);
        assert_eq!(or_cardinality(&[1, 1], &[1]), 2);
        assert_eq!(or_cardinality(&[], &[0xFF]), 8);
    }

    #[test]
    fn and_with_unequal_lengths() {
        assert_eq!(and_cardinality(&[1], &[1, 1]), 1);
        assert_eq!(and_cardinality(&[], &[0xFF]), 0);
        assert_eq!(and_cardinality(&[0b1100], &[0b1010]), 1);
    }

    #[test]
    fn xor_matches_or_minus_and() {
        let cases: &[(&[u64], &[u64])] = &[
            (&[0x1FFFF << 1], &[0xFFF_F800]),
            (&[1, 2, 4], &[1]),
            (&[], &[7]),
            (&[u64::MAX], &[u64::MAX]),
        ];
        for (a, b) in cases {
            assert_eq!(
                xor_cardinality(a, b),
                or_cardinality(a, b) - and_cardinality(a, b),
            );
            // Symmetry.
            assert_eq!(xor_cardinality(a, b), xor_cardinality(b, a));
        }
    }

    #[test]
    fn containment_is_subset_not_symmetric() {
        let outer: &[u64] = &[0b1111, 0b1];
        let inner: &[u64] = &[0b0101];
        assert!(contains_all(outer, inner));
        assert!(!contains_all(inner, outer));
        // Everything contains the empty set, including the empty set.
        assert!(contains_all(outer, &[]));
        assert!(contains_all(&[], &[]));
        assert!(!contains_all(&[], &[1]));
    }

    #[test]
    fn containment_with_longer_inner() {
        // Trimmed inner longer than outer must carry a high set bit.
        assert!(!contains_all(&[u64::MAX], &[u64::MAX, 1]));
    }

    #[test]
    fn indices_of_ascending() {
        let words = [0b1001u64, 0b1];
        let ones: Vec<usize> = indices_of(&words).collect();
        assert_eq!(ones, vec![0, 3, 64]);
    }
}
