use thiserror::Error;

/// Recoverable failures when building a [`BitSequence`](crate::BitSequence) from external data.
///
/// Contract violations on the hot paths (out-of-range positions, mismatched lengths)
/// are assertions, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitsError {
    #[error("{length} bits need {required} words but the storage holds exactly {available}")]
    ShapeMismatch {
        length: usize,
        required: usize,
        available: usize,
    },

    #[error("{length} bits need {expected} words, got {actual}")]
    WordCountMismatch {
        length: usize,
        expected: usize,
        actual: usize,
    },

    #[error("invalid character {character:?} at position {position}, expected '0', '1' or '_'")]
    InvalidCharacter { character: char, position: usize },
}
