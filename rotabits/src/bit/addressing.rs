use sorted_iter::{SortedIterator, assume::AssumeSortedByItemExt};

use crate::bit::Word;

// Helpers shared by every storage shape

#[inline]
#[must_use]
pub fn block_and_bit_index<W: Word>(index: usize) -> (usize, usize) {
    let block_index = index / W::BITS;
    let bit_index = index % W::BITS;
    (block_index, bit_index)
}

/// Number of words needed to hold `length` bits.
#[inline]
#[must_use]
pub const fn block_count(length: usize, bits_per_block: usize) -> usize {
    length.div_ceil(bits_per_block)
}

/// Mask of the bits of the final word that lie below `length`.
///
/// Returns [`Word::MAX`] when `length` is a multiple of the word width (including zero).
#[inline]
#[must_use]
pub fn padding_mask<W: Word>(length: usize) -> W {
    match length % W::BITS {
        0 => W::MAX,
        tail_bits => W::low_mask(tail_bits),
    }
}

pub fn support_iterator<'life, W: Word>(
    words: &'life [W],
    length: usize,
) -> impl SortedIterator<Item = usize> + 'life {
    words
        .iter()
        .enumerate()
        .flat_map(|(block_index, &word)| {
            (0..W::BITS)
                .filter(move |&bit_index| word.is_set(bit_index))
                .map(move |bit_index| block_index * W::BITS + bit_index)
        })
        .take_while(move |&index| index < length)
        .assume_sorted_by_item()
}
