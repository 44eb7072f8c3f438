use std::fmt;

use super::code::CodeTable;
use super::frequency::FrequencyTable;
use super::Symbol;

/// Size of an encoding compared to a fixed-width code over the same alphabet.
#[derive(Clone, Debug, PartialEq)]
pub struct CompressionReport {
    pub symbol_count: usize,
    pub distinct_symbols: usize,
    pub encoded_bits: usize,
    pub fixed_width_bits: usize,
    /// Shannon entropy of the observed distribution in bits per symbol.
    pub entropy: f64,
}

impl CompressionReport {
    pub fn new<S: Symbol>(frequencies: &FrequencyTable<S>, table: &CodeTable<S>) -> Self {
        let symbol_count = frequencies.total();
        let distinct_symbols = frequencies.len();
        let encoded_bits: usize = frequencies
            .iter()
            .map(|entry| entry.frequency * table.code(&entry.symbol).map_or(0, |c| c.len()))
            .sum();
        let entropy: f64 = frequencies
            .iter()
            .map(|entry| {
                let probability = entry.frequency as f64 / symbol_count as f64;
                -probability * probability.log2()
            })
            .sum();
        CompressionReport {
            symbol_count,
            distinct_symbols,
            encoded_bits,
            fixed_width_bits: symbol_count * Self::fixed_width_code_length(distinct_symbols),
            entropy,
        }
    }

    /// `ceil(log2(max(distinct_symbols, 2)))`
    pub fn fixed_width_code_length(distinct_symbols: usize) -> usize {
        let distinct_symbols = distinct_symbols.max(2);
        (usize::BITS - (distinct_symbols - 1).leading_zeros()) as usize
    }

    /// Encoded size relative to the fixed-width size.
    pub fn rate(&self) -> f64 {
        self.encoded_bits as f64 / self.fixed_width_bits as f64
    }

    pub fn average_code_length(&self) -> f64 {
        self.encoded_bits as f64 / self.symbol_count as f64
    }
}

impl fmt::Display for CompressionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "symbols: {} ({} distinct)",
            self.symbol_count, self.distinct_symbols
        )?;
        writeln!(
            f,
            "encoded bits: {} (fixed width: {})",
            self.encoded_bits, self.fixed_width_bits
        )?;
        writeln!(
            f,
            "average code length: {:.3} bits (entropy: {:.3} bits)",
            self.average_code_length(),
            self.entropy
        )?;
        write!(f, "rate: {:.3}", self.rate())
    }
}
