use std::iter::zip;

use crate::bit::Word;

#[cfg(not(feature = "rayon"))]
#[inline]
#[must_use]
pub fn weight<W: Word>(words: &[W]) -> usize {
    words.iter().map(|&word| word.count_ones()).sum()
}

/// Popcount reduction over independent words; addition is commutative so partition order is irrelevant.
#[cfg(feature = "rayon")]
#[must_use]
pub fn weight<W: Word>(words: &[W]) -> usize {
    use rayon::prelude::*;
    words.par_iter().map(|&word| word.count_ones()).sum()
}

#[inline]
#[must_use]
pub fn and_weight<W: Word>(left: &[W], right: &[W]) -> usize {
    debug_assert_eq!(left.len(), right.len());
    zip(left, right).map(|(&left, &right)| (left & right).count_ones()).sum()
}

#[inline]
#[must_use]
pub fn or_weight<W: Word>(left: &[W], right: &[W]) -> usize {
    debug_assert_eq!(left.len(), right.len());
    zip(left, right).map(|(&left, &right)| (left | right).count_ones()).sum()
}
