use std::iter::zip;

use crate::bit::{Word, padding_mask};

/// Direction in which a neighbor mask spreads each set bit.
///
/// `Left` points towards bit index 0 and `Right` towards the end of the sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards lower indices.
    Left,
    /// Towards higher indices.
    Right,
}

/// Whether `distance` lies in the supported range `(0, W::BITS)`.
#[inline]
#[must_use]
pub fn is_supported_distance<W: Word>(distance: usize) -> bool {
    distance > 0 && distance < W::BITS
}

// Linear one-bit shift towards higher indices; bit 0 receives a zero carry.
#[inline]
fn shift_up<W: Word>(words: &mut [W]) {
    let mut carry = W::ZERO;
    for word in words.iter_mut() {
        let next_carry = *word >> (W::BITS - 1);
        *word = (*word << 1) | carry;
        carry = next_carry;
    }
}

// Linear one-bit shift towards lower indices; the last word receives a zero carry.
#[inline]
fn shift_down<W: Word>(words: &mut [W]) {
    let mut carry = W::ZERO;
    for word in words.iter_mut().rev() {
        let next_carry = *word << (W::BITS - 1);
        *word = (*word >> 1) | carry;
        carry = next_carry;
    }
}

/// ORs `distance` successive one-bit shifts of `working` into `target`.
///
/// Both slices must hold the source words on entry; `working` is scratch space afterwards.
/// The caller checks [`is_supported_distance`]; the final word of every shifted copy is
/// masked to `length` so that shifted-out bits never land in the padding.
pub fn spread_words<W: Word>(
    target: &mut [W],
    working: &mut [W],
    length: usize,
    distance: usize,
    direction: Direction,
) {
    debug_assert_eq!(target.len(), working.len());
    let tail = padding_mask::<W>(length);
    for _ in 0..distance {
        match direction {
            Direction::Left => shift_down(working),
            Direction::Right => shift_up(working),
        }
        if let Some(last) = working.last_mut() {
            *last &= tail;
        }
        for (output, &shifted) in zip(target.iter_mut(), working.iter()) {
            *output |= shifted;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spread(source: &[u8], length: usize, distance: usize, direction: Direction) -> Vec<u8> {
        let mut target = source.to_vec();
        let mut working = source.to_vec();
        spread_words(&mut target, &mut working, length, distance, direction);
        target
    }

    #[test]
    fn carries_cross_word_boundaries() {
        // bit 7 spreads right into bits 8 and 9
        assert_eq!(spread(&[0b1000_0000, 0], 16, 2, Direction::Right), vec![0b1000_0000, 0b11]);
        // bit 8 spreads left into bits 7 and 6
        assert_eq!(spread(&[0, 0b1], 16, 2, Direction::Left), vec![0b1100_0000, 0b1]);
    }

    #[test]
    fn shifts_are_linear() {
        assert_eq!(spread(&[0, 0b1000_0000], 16, 3, Direction::Right), vec![0, 0b1000_0000]);
        assert_eq!(spread(&[0b1, 0], 16, 3, Direction::Left), vec![0b1, 0]);
    }

    #[test]
    fn padding_stays_clear() {
        // length 10: bit 9 is the last valid bit of the second word
        assert_eq!(spread(&[0, 0b10], 10, 5, Direction::Right), vec![0, 0b10]);
    }

    #[test]
    fn supported_distances() {
        assert!(!is_supported_distance::<u8>(0));
        assert!(is_supported_distance::<u8>(1));
        assert!(is_supported_distance::<u8>(7));
        assert!(!is_supported_distance::<u8>(8));
    }
}
