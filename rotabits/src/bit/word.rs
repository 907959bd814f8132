use std::fmt::{Binary, Debug};
use std::hash::Hash;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not, Shl, Shr};

/// Fixed-width unsigned integer used as the storage unit of a [`BitSequence`](crate::BitSequence).
///
/// Bit `i` of a sequence lives in word `i / Word::BITS` at offset `i % Word::BITS`,
/// with offset 0 being the least significant bit of the word.
pub trait Word
where
    Self: Copy
        + Default
        + Eq
        + Hash
        + Debug
        + Binary
        + Send
        + Sync
        + 'static
        + BitAnd<Output = Self>
        + BitAndAssign
        + BitOr<Output = Self>
        + BitOrAssign
        + Not<Output = Self>
        + Shl<usize, Output = Self>
        + Shr<usize, Output = Self>,
{
    const BITS: usize;
    const ZERO: Self;
    const ONE: Self;
    const MAX: Self;

    fn count_ones(self) -> usize;

    /// Word with only bit `index` set.
    #[inline]
    #[must_use]
    fn bit(index: usize) -> Self {
        Self::ONE << index
    }

    /// Word with the `count` least significant bits set. Saturates at [`Word::MAX`].
    #[inline]
    #[must_use]
    fn low_mask(count: usize) -> Self {
        if count >= Self::BITS {
            Self::MAX
        } else {
            !(Self::MAX << count)
        }
    }

    #[inline]
    fn is_set(self, index: usize) -> bool {
        self & Self::bit(index) != Self::ZERO
    }
}

macro_rules! implement_word {
    ($word_type:ty) => {
        impl Word for $word_type {
            const BITS: usize = <$word_type>::BITS as usize;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MAX: Self = <$word_type>::MAX;

            #[inline]
            fn count_ones(self) -> usize {
                <$word_type>::count_ones(self) as usize
            }
        }
    };
}

implement_word!(u8);
implement_word!(u16);
implement_word!(u32);
implement_word!(u64);
implement_word!(u128);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_mask_saturates() {
        assert_eq!(u8::low_mask(0), 0);
        assert_eq!(u8::low_mask(3), 0b111);
        assert_eq!(u8::low_mask(8), u8::MAX);
        assert_eq!(u64::low_mask(64), u64::MAX);
        assert_eq!(u128::low_mask(127), u128::MAX >> 1);
    }

    #[test]
    fn bit_and_is_set_agree() {
        for index in 0..u32::BITS as usize {
            let word = u32::bit(index);
            assert!(word.is_set(index));
            assert_eq!(Word::count_ones(word), 1);
        }
    }
}
