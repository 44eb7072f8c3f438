//! Static Huffman coding over arbitrary hashable symbols.
//!
//! The pipeline is split into frequency analysis ([`FrequencyTable`]), tree construction
//! ([`HuffmanTree`]) and code derivation ([`CodeTable`]). [`CodeBook`] bundles the results of
//! one build into an immutable value, [`HuffmanCodec`] keeps the most recent one around.
use std::fmt::Debug;
use std::hash::Hash;

pub mod bits;
pub mod code;
pub mod codec;
pub mod decoder;
pub mod encoder;
pub mod frequency;
pub mod report;
pub mod tree;

pub use bits::BitString;
pub use code::CodeTable;
pub use codec::{encode, CodeBook, Encoded, HuffmanCodec};
pub use decoder::{HuffmanDecoder, TrailingBits};
pub use encoder::HuffmanEncoder;
pub use frequency::FrequencyTable;
pub use report::CompressionReport;
pub use tree::HuffmanTree;

/// Anything usable as a key of a frequency table. `Debug` is only needed for logging and
/// rendering trees.
pub trait Symbol: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> Symbol for T {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolFrequency<S> {
    pub symbol: S,
    pub frequency: usize,
}

impl<S> From<(S, usize)> for SymbolFrequency<S> {
    fn from(value: (S, usize)) -> Self {
        Self {
            symbol: value.0,
            frequency: value.1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolCode<S> {
    pub symbol: S,
    pub code: BitString,
}

impl<S> SymbolCode<S> {
    pub fn length(&self) -> usize {
        self.code.len()
    }
}

impl<S> From<(S, BitString)> for SymbolCode<S> {
    fn from(value: (S, BitString)) -> Self {
        Self {
            symbol: value.0,
            code: value.1,
        }
    }
}
