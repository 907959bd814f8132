mod bit_sequence;
pub mod neighbor_mask;
pub mod population;
pub mod rotate;
mod text;

pub use bit_sequence::{BitArray, BitSequence, StaticBitArray};
pub use neighbor_mask::Direction;
