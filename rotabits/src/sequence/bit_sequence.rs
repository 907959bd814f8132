use std::hash::{Hash, Hasher};

use sorted_iter::SortedIterator;

use crate::bit::addressing::support_iterator;
use crate::bit::{Word, block_and_bit_index, block_count, padding_mask};
use crate::error::BitsError;
use crate::sequence::neighbor_mask::{self, Direction};
use crate::sequence::{population, rotate};
use crate::storage::WordArray;

/// A fixed-length sequence of bits stored in words, built for fast circular rotation
/// and neighbor-mask construction over binary event trains.
///
/// `BitSequence` is generic over its [`WordArray`] storage. Two shapes are provided:
///
/// - [`BitArray`] keeps its words in a `Vec` and takes its length at runtime.
/// - [`StaticBitArray`] keeps its words inline in an array whose size is fixed at compile time.
///
/// Both share the same algorithms, and the derivation and combination operations accept a
/// source of either shape as long as the word type matches.
///
/// # Invariants
///
/// - Bits of the final word at or beyond [`len`](BitSequence::len) are always zero.
/// - [`count`](BitSequence::count) always equals [`recount`](BitSequence::recount):
///   [`set`](BitSequence::set) and [`clear`](BitSequence::clear) only adjust the cached
///   count when the bit actually changes.
///
/// # Example
///
/// ```
/// use rotabits::BitArray;
///
/// let mut spikes = BitArray::<u64>::new(100);
/// spikes.set(3).set(99);
///
/// let rotated = spikes.rotated(1);
/// assert!(rotated.test(4));
/// assert!(rotated.test(0));
/// assert_eq!(rotated.count(), 2);
///
/// // spikes of `rotated` that follow a spike of `spikes` within two steps
/// let window = spikes.right_neighbor_mask(2);
/// assert_eq!(rotated.common(&window), 1);
/// ```
///
/// # Contracts
///
/// Positions passed to [`set`](BitSequence::set), [`clear`](BitSequence::clear) and
/// [`test`](BitSequence::test) must be below the length, and operands of rotation, masks
/// and intersection must have equal lengths. These are checked with debug
/// assertions only.
#[must_use]
#[derive(Clone, Debug)]
pub struct BitSequence<Storage> {
    length: usize,
    count: usize,
    words: Storage,
}

/// Growable shape: length chosen at runtime, words on the heap.
pub type BitArray<W = u64> = BitSequence<Vec<W>>;

/// Fixed-capacity shape: `WORDS` words held inline.
///
/// Use [`StaticBitArray::with_length`] to fix the logical length at compile time as well.
pub type StaticBitArray<const WORDS: usize, W = u64> = BitSequence<[W; WORDS]>;

impl<Storage: WordArray> BitSequence<Storage> {
    /// Creates a sequence of `length` clear bits.
    ///
    /// # Errors
    ///
    /// Returns [`BitsError::ShapeMismatch`] when the storage has a fixed word count that
    /// differs from the one `length` requires.
    pub fn try_new(length: usize) -> Result<Self, BitsError> {
        let required = block_count(length, <Storage::Element as Word>::BITS);
        let words = Storage::zeroed(required).ok_or_else(|| BitsError::ShapeMismatch {
            length,
            required,
            available: Storage::fixed_word_count().unwrap_or_default(),
        })?;
        Ok(Self { length, count: 0, words })
    }

    /// Creates a sequence of `length` clear bits.
    ///
    /// A zero `length` yields an empty sequence without words.
    ///
    /// # Panics
    ///
    /// Panics when the storage cannot hold `length` bits, see [`try_new`](Self::try_new).
    pub fn new(length: usize) -> Self {
        match Self::try_new(length) {
            Ok(sequence) => sequence,
            Err(error) => panic!("{error}"),
        }
    }

    /// Builds a sequence from raw words. Bits beyond `length` in the last word are discarded.
    ///
    /// # Errors
    ///
    /// Returns [`BitsError::WordCountMismatch`] if `words` does not hold exactly the number of
    /// words `length` requires, or [`BitsError::ShapeMismatch`] as in [`try_new`](Self::try_new).
    pub fn try_from_words(length: usize, words: &[Storage::Element]) -> Result<Self, BitsError> {
        let expected = block_count(length, <Storage::Element as Word>::BITS);
        if words.len() != expected {
            return Err(BitsError::WordCountMismatch {
                length,
                expected,
                actual: words.len(),
            });
        }
        let mut sequence = Self::try_new(length)?;
        sequence.words.words_mut().copy_from_slice(words);
        sequence.clear_padding();
        sequence.count = sequence.recount();
        Ok(sequence)
    }

    /// Logical number of bits.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.length
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.words().len()
    }

    /// Raw words, least significant bit of word 0 first.
    #[inline]
    #[must_use]
    pub fn as_words(&self) -> &[Storage::Element] {
        self.words.words()
    }

    /// Cached number of set bits.
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of set bits computed by a full scan of the words.
    #[must_use]
    pub fn recount(&self) -> usize {
        population::weight(self.words.words())
    }

    #[inline]
    #[must_use]
    pub fn test(&self, position: usize) -> bool {
        debug_assert!(position < self.length, "bit {position} out of range for length {}", self.length);
        let (block_index, bit_index) = block_and_bit_index::<Storage::Element>(position);
        self.words.words()[block_index].is_set(bit_index)
    }

    /// Sets the bit at `position`; the count only changes if the bit was clear.
    #[inline]
    pub fn set(&mut self, position: usize) -> &mut Self {
        debug_assert!(position < self.length, "bit {position} out of range for length {}", self.length);
        let (block_index, bit_index) = block_and_bit_index::<Storage::Element>(position);
        let mask = <Storage::Element as Word>::bit(bit_index);
        let word = &mut self.words.words_mut()[block_index];
        if *word & mask == <Storage::Element as Word>::ZERO {
            *word |= mask;
            self.count += 1;
        }
        self
    }

    /// Clears the bit at `position`; the count only changes if the bit was set.
    #[inline]
    pub fn clear(&mut self, position: usize) -> &mut Self {
        debug_assert!(position < self.length, "bit {position} out of range for length {}", self.length);
        let (block_index, bit_index) = block_and_bit_index::<Storage::Element>(position);
        let mask = <Storage::Element as Word>::bit(bit_index);
        let word = &mut self.words.words_mut()[block_index];
        if *word & mask != <Storage::Element as Word>::ZERO {
            *word &= !mask;
            self.count -= 1;
        }
        self
    }

    /// Clears every bit.
    pub fn reset(&mut self) {
        self.words.words_mut().fill(<Storage::Element as Word>::ZERO);
        self.count = 0;
    }

    /// Sorted positions of the set bits.
    pub fn support(&self) -> impl SortedIterator<Item = usize> + '_ {
        support_iterator(self.words.words(), self.length)
    }

    fn clear_padding(&mut self) {
        let tail = padding_mask::<Storage::Element>(self.length);
        if let Some(last) = self.words.words_mut().last_mut() {
            *last &= tail;
        }
    }

    /// Overwrites `self` with `source` rotated right by `amount` positions:
    /// bit `i` of the result is bit `(i + len - amount) % len` of `source`.
    ///
    /// The rotation is assembled a word at a time. `amount` may exceed the length.
    ///
    /// ```
    /// use rotabits::{BitArray, StaticBitArray};
    ///
    /// let source: StaticBitArray<2, u8> = "000000001".parse().unwrap();
    /// let mut rotated = BitArray::<u8>::new(9);
    /// rotated.rotate_from(&source, 1);
    /// assert_eq!(rotated.to_string(), "100000000");
    /// ```
    pub fn rotate_from<Other>(&mut self, source: &BitSequence<Other>, amount: usize)
    where
        Other: WordArray<Element = Storage::Element>,
    {
        debug_assert_eq!(self.length, source.length, "rotation between sequences of different length");
        if self.length > 0 && amount >= self.length {
            tracing::trace!(amount, length = self.length, "normalizing rotation amount");
        }
        rotate::rotate_words(self.words.words_mut(), source.words.words(), self.length, amount);
        self.count = source.count;
    }

    /// Elementwise rotation with the same result as [`rotate_from`](Self::rotate_from),
    /// one bit at a time. Kept as a reference for testing and benchmarking.
    pub fn rotate_bitwise_from<Other>(&mut self, source: &BitSequence<Other>, amount: usize)
    where
        Other: WordArray<Element = Storage::Element>,
    {
        debug_assert_eq!(self.length, source.length, "rotation between sequences of different length");
        rotate::rotate_bits(self.words.words_mut(), source.words.words(), self.length, amount);
        self.count = source.count;
    }

    /// Returns a copy of `self` rotated right by `amount` positions.
    pub fn rotated(&self, amount: usize) -> Self {
        let mut result = self.clone();
        result.rotate_from(self, amount);
        result
    }

    fn neighbor_mask_from<Other>(
        &mut self,
        source: &BitSequence<Other>,
        distance: usize,
        direction: Direction,
    ) where
        Other: WordArray<Element = Storage::Element>,
    {
        debug_assert_eq!(self.length, source.length, "neighbor mask between sequences of different length");
        self.words.words_mut().copy_from_slice(source.words.words());
        self.count = source.count;
        if !neighbor_mask::is_supported_distance::<Storage::Element>(distance) {
            tracing::debug!(
                distance,
                word_bits = <Storage::Element as Word>::BITS,
                ?direction,
                "neighbor mask distance outside supported range, copying source"
            );
            return;
        }
        let mut working = self.words.clone();
        neighbor_mask::spread_words(
            self.words.words_mut(),
            working.words_mut(),
            self.length,
            distance,
            direction,
        );
        self.count = self.recount();
    }

    /// Overwrites `self` with the left neighbor mask of `source`: bit `i` is set when any of
    /// `source[i..=i + distance]` is set. Shifts are linear, nothing wraps around.
    ///
    /// `distance` must lie in `1..Word::BITS`; any other value yields a plain copy of `source`.
    pub fn left_neighbor_mask_from<Other>(&mut self, source: &BitSequence<Other>, distance: usize)
    where
        Other: WordArray<Element = Storage::Element>,
    {
        self.neighbor_mask_from(source, distance, Direction::Left);
    }

    /// Overwrites `self` with the right neighbor mask of `source`: bit `i` is set when any of
    /// `source[i - distance..=i]` is set. Shifts are linear, nothing wraps around.
    ///
    /// `distance` must lie in `1..Word::BITS`; any other value yields a plain copy of `source`.
    ///
    /// ```
    /// use rotabits::BitArray;
    ///
    /// let spikes: BitArray<u8> = "00001000".parse().unwrap();
    /// let mut mask = BitArray::<u8>::new(8);
    /// mask.right_neighbor_mask_from(&spikes, 2);
    /// assert_eq!(mask.to_string(), "00001110");
    /// mask.left_neighbor_mask_from(&spikes, 2);
    /// assert_eq!(mask.to_string(), "00111000");
    /// ```
    pub fn right_neighbor_mask_from<Other>(&mut self, source: &BitSequence<Other>, distance: usize)
    where
        Other: WordArray<Element = Storage::Element>,
    {
        self.neighbor_mask_from(source, distance, Direction::Right);
    }

    pub fn left_neighbor_mask(&self, distance: usize) -> Self {
        let mut result = self.clone();
        result.left_neighbor_mask_from(self, distance);
        result
    }

    pub fn right_neighbor_mask(&self, distance: usize) -> Self {
        let mut result = self.clone();
        result.right_neighbor_mask_from(self, distance);
        result
    }

    /// Number of positions set in both `self` and `other`.
    #[must_use]
    pub fn common<Other>(&self, other: &BitSequence<Other>) -> usize
    where
        Other: WordArray<Element = Storage::Element>,
    {
        debug_assert_eq!(self.length, other.length, "intersection of sequences of different length");
        population::and_weight(self.words.words(), other.words.words())
    }

    /// Number of positions set in `self` or `other`.
    #[must_use]
    pub fn union_count<Other>(&self, other: &BitSequence<Other>) -> usize
    where
        Other: WordArray<Element = Storage::Element>,
    {
        debug_assert_eq!(self.length, other.length, "union of sequences of different length");
        population::or_weight(self.words.words(), other.words.words())
    }
}

impl<W: Word, const WORDS: usize> BitSequence<[W; WORDS]> {
    /// Creates a fixed-shape sequence whose length is a compile-time constant.
    ///
    /// ```
    /// use rotabits::StaticBitArray;
    ///
    /// let spikes = StaticBitArray::<10, u64>::with_length::<631>();
    /// assert_eq!(spikes.len(), 631);
    /// assert_eq!(spikes.word_count(), 10);
    /// ```
    pub fn with_length<const LENGTH: usize>() -> Self {
        const {
            assert!(
                block_count(LENGTH, W::BITS) == WORDS,
                "word count does not match the requested length"
            );
        }
        Self {
            length: LENGTH,
            count: 0,
            words: [W::ZERO; WORDS],
        }
    }
}

impl<W: Word, const WORDS: usize> From<&BitSequence<[W; WORDS]>> for BitSequence<Vec<W>> {
    fn from(fixed: &BitSequence<[W; WORDS]>) -> Self {
        Self {
            length: fixed.length,
            count: fixed.count,
            words: fixed.words.to_vec(),
        }
    }
}

impl<W: Word> FromIterator<bool> for BitSequence<Vec<W>> {
    fn from_iter<Bits: IntoIterator<Item = bool>>(bits: Bits) -> Self {
        let bits: Vec<bool> = bits.into_iter().collect();
        let mut sequence = Self::new(bits.len());
        for (index, _) in bits.iter().enumerate().filter(|(_, bit)| **bit) {
            sequence.set(index);
        }
        sequence
    }
}

impl<Storage, Other> PartialEq<BitSequence<Other>> for BitSequence<Storage>
where
    Storage: WordArray,
    Other: WordArray<Element = Storage::Element>,
{
    // Sequences of different lengths compare unequal.
    fn eq(&self, other: &BitSequence<Other>) -> bool {
        self.length == other.length && self.words.words() == other.words.words()
    }
}

impl<Storage: WordArray> Eq for BitSequence<Storage> {}

impl<Storage: WordArray> Hash for BitSequence<Storage> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        self.words.words().hash(state);
    }
}
