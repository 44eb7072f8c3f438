use std::collections::HashMap;

use super::{Symbol, SymbolFrequency};
use crate::error::Error;
use crate::Result;

/// Occurrence counts of the distinct symbols of one input sequence.
///
/// Entries are kept in order of first appearance. That rank is the stable sequence number
/// tree construction falls back on when weights tie, so a table built twice from the same
/// input always yields the same tree.
#[derive(Clone, Debug)]
pub struct FrequencyTable<S> {
    entries: Vec<SymbolFrequency<S>>,
    positions: HashMap<S, usize>,
    total: usize,
}

impl<S: Symbol> FrequencyTable<S> {
    pub fn from_symbols(symbols: &[S]) -> Result<Self> {
        if symbols.is_empty() {
            return Err(Error::EmptyInput);
        }
        let mut table = FrequencyTable {
            entries: Vec::new(),
            positions: HashMap::new(),
            total: 0,
        };
        for symbol in symbols {
            table.count(symbol);
        }
        Ok(table)
    }

    fn count(&mut self, symbol: &S) {
        match self.positions.get(symbol) {
            Some(&index) => self.entries[index].frequency += 1,
            None => {
                self.positions.insert(symbol.clone(), self.entries.len());
                self.entries.push(SymbolFrequency {
                    symbol: symbol.clone(),
                    frequency: 1,
                });
            }
        }
        self.total += 1;
    }

    pub fn get(&self, symbol: &S) -> Option<usize> {
        self.positions
            .get(symbol)
            .map(|&index| self.entries[index].frequency)
    }
}

impl<S> FrequencyTable<S> {
    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length of the sequence the table was built from.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn entries(&self) -> &[SymbolFrequency<S>] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &SymbolFrequency<S>> {
        self.entries.iter()
    }
}
