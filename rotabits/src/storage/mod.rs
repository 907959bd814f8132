use crate::bit::Word;

mod arrays;
mod vecs;

/// Indexable run of words backing a [`BitSequence`](crate::BitSequence).
///
/// The word-level algorithms only ever see the `&[Word]`/`&mut [Word]` this
/// trait hands out, so every storage shape shares one implementation.
pub trait WordArray: Clone {
    type Element: Word;

    /// Zero-filled storage of exactly `word_count` words, or `None` when the
    /// shape cannot hold that many.
    fn zeroed(word_count: usize) -> Option<Self>;

    /// Word count fixed by the type, if any.
    fn fixed_word_count() -> Option<usize> {
        None
    }

    fn words(&self) -> &[Self::Element];

    fn words_mut(&mut self) -> &mut [Self::Element];
}
