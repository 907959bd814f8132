use crate::bit::{Word, block_and_bit_index, block_count};

/// Reads `count` consecutive bits starting at `start`.
///
/// Requires `1 <= count <= W::BITS` and `start + count <= words.len() * W::BITS`.
/// Bits of the result at offsets `>= count` are zero.
#[inline]
fn extract<W: Word>(words: &[W], start: usize, count: usize) -> W {
    let (block_index, bit_index) = block_and_bit_index::<W>(start);
    let mut word = words[block_index] >> bit_index;
    if bit_index + count > W::BITS {
        word |= words[block_index + 1] << (W::BITS - bit_index);
    }
    word & W::low_mask(count)
}

/// Reads `count` bits starting at `start` of the circular sequence formed by the first `length` bits.
///
/// The run is split at the wraparound point, so bits of the final word at or beyond `length`
/// never leak into the result.
#[inline]
fn extract_circular<W: Word>(words: &[W], length: usize, start: usize, count: usize) -> W {
    let head = count.min(length - start);
    let mut word = extract(words, start, head);
    if head < count {
        word |= extract(words, 0, count - head) << head;
    }
    word
}

/// Word-level right circular rotation: `target[i] = source[(i + length - amount) mod length]`.
///
/// Each output word is assembled from at most four source words, so the cost is
/// `O(word count)` rather than `O(length)`. The final output word only receives the bits
/// below `length`, which keeps its padding zero.
pub fn rotate_words<W: Word>(target: &mut [W], source: &[W], length: usize, amount: usize) {
    debug_assert_eq!(target.len(), source.len());
    debug_assert_eq!(source.len(), block_count(length, W::BITS));
    if length == 0 {
        return;
    }
    let amount = amount % length;
    if amount == 0 {
        target.copy_from_slice(source);
        return;
    }

    let mut cursor = length - amount;
    for (block_index, output) in target.iter_mut().enumerate() {
        let count = W::BITS.min(length - block_index * W::BITS);
        *output = extract_circular(source, length, cursor, count);
        cursor += count;
        if cursor >= length {
            cursor -= length;
        }
    }
}

/// Elementwise reference rotation with the same contract as [`rotate_words`].
pub fn rotate_bits<W: Word>(target: &mut [W], source: &[W], length: usize, amount: usize) {
    debug_assert_eq!(target.len(), source.len());
    target.fill(W::ZERO);
    if length == 0 {
        return;
    }
    let amount = amount % length;
    for index in 0..length {
        let (source_block, source_bit) = block_and_bit_index::<W>((index + length - amount) % length);
        if source[source_block].is_set(source_bit) {
            let (target_block, target_bit) = block_and_bit_index::<W>(index);
            target[target_block] |= W::bit(target_bit);
        }
    }
}
