use crate::bit::Word;
use crate::storage::WordArray;

// Growable storage: word count decided at runtime.
impl<W: Word> WordArray for Vec<W> {
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
        Some(vec![W::ZERO; word_count])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_vec_has_requested_length() {
        let words = <Vec<u16> as WordArray>::zeroed(5).unwrap();
        assert_eq!(words.len(), 5);
        assert!(words.iter().all(|&word| word == 0));
        assert_eq!(<Vec<u16> as WordArray>::fixed_word_count(), None);
    }
}
