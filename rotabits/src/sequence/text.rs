use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::bit::Word;
use crate::error::BitsError;
use crate::sequence::BitSequence;
use crate::storage::WordArray;

/// `{}` writes one character per bit, index 0 first.
/// `{:#}` writes one line per word, most significant bit first.
impl<Storage: WordArray> Display for BitSequence<Storage> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        if formatter.alternate() {
            let width = <Storage::Element as Word>::BITS;
            for (block_index, word) in self.as_words().iter().enumerate() {
                if block_index > 0 {
                    writeln!(formatter)?;
                }
                write!(formatter, "{word:0width$b}")?;
            }
            return Ok(());
        }
        for position in 0..self.len() {
            formatter.write_str(if self.test(position) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Parses `'0'`/`'1'` characters, index 0 first. `'_'` may be used as a separator.
impl<Storage: WordArray> FromStr for BitSequence<Storage> {
    type Err = BitsError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut bits = Vec::with_capacity(text.len());
        for (position, character) in text.chars().enumerate() {
            match character {
                '0' => bits.push(false),
                '1' => bits.push(true),
                '_' => (),
                _ => return Err(BitsError::InvalidCharacter { character, position }),
            }
        }
        let mut sequence = Self::try_new(bits.len())?;
        for (index, _) in bits.iter().enumerate().filter(|(_, bit)| **bit) {
            sequence.set(index);
        }
        Ok(sequence)
    }
}
