pub mod bit;
pub use bit::Word;

pub mod error;
pub use error::BitsError;

pub mod storage;
pub use storage::WordArray;

pub mod sequence;
pub use sequence::{BitArray, BitSequence, Direction, StaticBitArray};

#[cfg(feature = "serde")]
mod serde;
