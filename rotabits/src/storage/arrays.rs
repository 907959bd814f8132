use crate::bit::Word;
use crate::storage::WordArray;

// Fixed-capacity storage: word count fixed at compile time, words held inline.
impl<W: Word, const SIZE: usize> WordArray for [W; SIZE] {
    type Element = W;

    #[inline]
    fn words(&self) -> &[W] {
        self.as_slice()
    }

    #[inline]
    fn words_mut(&mut self) -> &mut [W] {
        self.as_mut_slice()
    }

    fn zeroed(word_count: usize) -> Option<Self> {
        (word_count == SIZE).then_some([W::ZERO; SIZE])
    }

    fn fixed_word_count() -> Option<usize> {
        Some(SIZE)
    }
}
