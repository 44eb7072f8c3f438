use std::collections::HashMap;

use super::bits::BitString;
use super::tree::HuffmanTree;
use super::{Symbol, SymbolCode};
use crate::error::Error;
use crate::Result;

/// Paired lookup tables from symbol to code word and from code word back to symbol.
///
/// Both directions are always filled together and stay inverse to each other.
#[derive(Clone, Debug)]
pub struct CodeTable<S> {
    encode_table: HashMap<S, BitString>,
    decode_table: HashMap<BitString, S>,
}

impl<S: Symbol> CodeTable<S> {
    pub fn from_tree(tree: &HuffmanTree<S>) -> Self {
        let mut table = Self::with_capacity(tree.leaf_count());
        match tree.root_symbol() {
            // an empty code could not be told apart while decoding
            Some(symbol) => table.insert(symbol.clone(), BitString::from(vec![false])),
            None => {
                for (symbol, path) in tree.leaf_paths() {
                    table.insert(symbol.clone(), path);
                }
            }
        }
        table
    }

    /// Build a table from code words obtained out of band, e.g. shipped alongside the bits.
    pub fn from_codes<I>(codes: I) -> Result<Self>
    where
        I: IntoIterator<Item = SymbolCode<S>>,
    {
        let codes = codes.into_iter();
        let mut table = Self::with_capacity(codes.size_hint().0);
        for (index, SymbolCode { symbol, code }) in codes.enumerate() {
            if code.is_empty() {
                return Err(Error::EmptyCode);
            }
            if table.encode_table.contains_key(&symbol) {
                return Err(Error::DuplicateSymbol { index });
            }
            if table.decode_table.contains_key(&code) {
                return Err(Error::PrefixConflict {
                    code: code.to_string(),
                    prefix: code.to_string(),
                });
            }
            table.insert(symbol, code);
        }
        if let Some((prefix, code)) = table.find_prefix_conflict() {
            return Err(Error::PrefixConflict {
                code: code.to_string(),
                prefix: prefix.to_string(),
            });
        }
        Ok(table)
    }

    fn with_capacity(capacity: usize) -> Self {
        CodeTable {
            encode_table: HashMap::with_capacity(capacity),
            decode_table: HashMap::with_capacity(capacity),
        }
    }

    fn insert(&mut self, symbol: S, code: BitString) {
        self.decode_table.insert(code.clone(), symbol.clone());
        self.encode_table.insert(symbol, code);
    }

    pub fn code(&self, symbol: &S) -> Option<&BitString> {
        self.encode_table.get(symbol)
    }

    /// All entries ordered by code length, then by code word.
    pub fn codes(&self) -> Vec<SymbolCode<S>> {
        let mut codes: Vec<SymbolCode<S>> = self
            .decode_table
            .iter()
            .map(|(code, symbol)| SymbolCode {
                symbol: symbol.clone(),
                code: code.clone(),
            })
            .collect();
        codes.sort_by(|a, b| a.length().cmp(&b.length()).then_with(|| a.code.cmp(&b.code)));
        codes
    }
}

impl<S> CodeTable<S> {
    pub fn symbol(&self, code: &BitString) -> Option<&S> {
        self.decode_table.get(code)
    }

    pub fn encode_table(&self) -> &HashMap<S, BitString> {
        &self.encode_table
    }

    pub fn decode_table(&self) -> &HashMap<BitString, S> {
        &self.decode_table
    }

    pub fn len(&self) -> usize {
        self.decode_table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decode_table.is_empty()
    }

    pub fn max_code_length(&self) -> usize {
        self.decode_table
            .keys()
            .map(BitString::len)
            .max()
            .unwrap_or_default()
    }

    pub fn is_prefix_free(&self) -> bool {
        self.find_prefix_conflict().is_none()
    }

    // After sorting, a code that prefixes any other code also prefixes its direct successor.
    fn find_prefix_conflict(&self) -> Option<(&BitString, &BitString)> {
        let mut codes: Vec<&BitString> = self.decode_table.keys().collect();
        codes.sort();
        codes
            .windows(2)
            .find(|pair| pair[1].starts_with(pair[0]))
            .map(|pair| (pair[0], pair[1]))
    }
}

impl<S> Default for CodeTable<S> {
    fn default() -> Self {
        CodeTable {
            encode_table: HashMap::new(),
            decode_table: HashMap::new(),
        }
    }
}
