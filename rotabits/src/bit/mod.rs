pub mod addressing;
pub mod word;

pub use addressing::{block_and_bit_index, block_count, padding_mask};
pub use word::Word;
