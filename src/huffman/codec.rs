use std::collections::HashMap;

use super::bits::BitString;
use super::code::CodeTable;
use super::decoder::{HuffmanDecoder, TrailingBits};
use super::encoder::HuffmanEncoder;
use super::frequency::FrequencyTable;
use super::report::CompressionReport;
use super::tree::HuffmanTree;
use super::Symbol;
use crate::logger::log_code_table;
use crate::Result;

/// Everything one build derives from an input: frequencies, tree and code table.
#[derive(Clone, Debug)]
pub struct CodeBook<S> {
    frequencies: FrequencyTable<S>,
    tree: HuffmanTree<S>,
    table: CodeTable<S>,
}

impl<S: Symbol> CodeBook<S> {
    pub fn build(symbols: &[S]) -> Result<Self> {
        Self::from_frequencies(FrequencyTable::from_symbols(symbols)?)
    }

    pub fn from_frequencies(frequencies: FrequencyTable<S>) -> Result<Self> {
        let tree = HuffmanTree::new(&frequencies)?;
        let table = CodeTable::from_tree(&tree);
        log::debug!(
            "Built tree with {} leaves and depth {} over {} symbols",
            tree.leaf_count(),
            tree.depth(),
            tree.weight()
        );
        Ok(CodeBook {
            frequencies,
            tree,
            table,
        })
    }

    pub fn encode(&self, symbols: &[S]) -> Result<BitString> {
        HuffmanEncoder::new(&self.table).encode(symbols)
    }

    pub fn decode(&self, bits: &BitString) -> Result<Vec<S>> {
        HuffmanDecoder::new(&self.table).decode(bits)
    }

    pub fn report(&self) -> CompressionReport {
        CompressionReport::new(&self.frequencies, &self.table)
    }
}

impl<S> CodeBook<S> {
    pub fn frequencies(&self) -> &FrequencyTable<S> {
        &self.frequencies
    }

    pub fn tree(&self) -> &HuffmanTree<S> {
        &self.tree
    }

    pub fn table(&self) -> &CodeTable<S> {
        &self.table
    }
}

/// Encoded bits together with the code book needed to decode them.
#[derive(Clone, Debug)]
pub struct Encoded<S> {
    bits: BitString,
    code_book: CodeBook<S>,
}

impl<S: Symbol> Encoded<S> {
    pub fn decode(&self) -> Result<Vec<S>> {
        self.code_book.decode(&self.bits)
    }
}

impl<S> Encoded<S> {
    pub fn bits(&self) -> &BitString {
        &self.bits
    }

    pub fn code_book(&self) -> &CodeBook<S> {
        &self.code_book
    }

    pub fn into_parts(self) -> (BitString, CodeBook<S>) {
        (self.bits, self.code_book)
    }
}

/// Build a code from the frequencies of `symbols` and encode them with it.
pub fn encode<S: Symbol>(symbols: &[S]) -> Result<Encoded<S>> {
    let code_book = CodeBook::build(symbols)?;
    let bits = code_book.encode(symbols)?;
    log::info!(
        "Encoded {} symbols ({} distinct) into {} bits",
        symbols.len(),
        code_book.table().len(),
        bits.len()
    );
    if log::log_enabled!(log::Level::Debug) {
        log_code_table(code_book.table());
    }
    Ok(Encoded { bits, code_book })
}

/// Keeps the code of the most recent [`HuffmanCodec::encode`] call for later decoding.
///
/// Tables are only replaced once a new build completed, a failed call leaves the
/// previous state untouched.
#[derive(Clone, Debug)]
pub struct HuffmanCodec<S> {
    tree: Option<HuffmanTree<S>>,
    table: Option<CodeTable<S>>,
    trailing_bits: TrailingBits,
}

impl<S: Symbol> HuffmanCodec<S> {
    pub fn new() -> Self {
        HuffmanCodec {
            tree: None,
            table: None,
            trailing_bits: TrailingBits::default(),
        }
    }

    pub fn with_trailing_bits(mut self, trailing_bits: TrailingBits) -> Self {
        self.trailing_bits = trailing_bits;
        self
    }

    pub fn encode(&mut self, symbols: &[S]) -> Result<BitString> {
        let (bits, code_book) = encode(symbols)?.into_parts();
        self.tree = Some(code_book.tree);
        self.table = Some(code_book.table);
        Ok(bits)
    }

    pub fn decode(&self, bits: &BitString) -> Result<Vec<S>> {
        let empty_table = CodeTable::default();
        let table = self.table.as_ref().unwrap_or(&empty_table);
        HuffmanDecoder::new(table)
            .with_trailing_bits(self.trailing_bits)
            .decode(bits)
    }

    /// Use a table obtained out of band. The tree of a previous encode is dropped.
    pub fn load_table(&mut self, table: CodeTable<S>) {
        self.tree = None;
        self.table = Some(table);
    }

    pub fn encode_table(&self) -> Option<&HashMap<S, BitString>> {
        self.table.as_ref().map(CodeTable::encode_table)
    }

    pub fn decode_table(&self) -> Option<&HashMap<BitString, S>> {
        self.table.as_ref().map(CodeTable::decode_table)
    }

    pub fn table(&self) -> Option<&CodeTable<S>> {
        self.table.as_ref()
    }

    pub fn tree(&self) -> Option<&HuffmanTree<S>> {
        self.tree.as_ref()
    }
}

impl<S: Symbol> Default for HuffmanCodec<S> {
    fn default() -> Self {
        Self::new()
    }
}
