use super::bits::BitString;
use super::code::CodeTable;
use super::Symbol;
use crate::error::Error;
use crate::Result;

/// What to do with bits left over once the input is exhausted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrailingBits {
    /// Fail with [`Error::Decode`].
    #[default]
    Reject,
    /// Stop at the first undecodable bits and return the symbols decoded so far.
    Discard,
}

/// Decodes by growing a candidate buffer bit by bit until it equals a known code word.
///
/// Since the table is prefix-free the first exact match is the only possible one. A candidate
/// as long as the longest code word without a match marks the input as undecodable, so the
/// buffer never grows past that length.
pub struct HuffmanDecoder<'a, S> {
    table: &'a CodeTable<S>,
    trailing_bits: TrailingBits,
}

impl<'a, S: Symbol> HuffmanDecoder<'a, S> {
    pub fn new(table: &'a CodeTable<S>) -> Self {
        HuffmanDecoder {
            table,
            trailing_bits: TrailingBits::default(),
        }
    }

    pub fn with_trailing_bits(mut self, trailing_bits: TrailingBits) -> Self {
        self.trailing_bits = trailing_bits;
        self
    }

    pub fn decode(&self, bits: &BitString) -> Result<Vec<S>> {
        let max_code_length = self.table.max_code_length();
        let mut symbols = Vec::new();
        let mut candidate = BitString::with_capacity(max_code_length);
        for bit in bits.iter() {
            candidate.push(bit);
            if let Some(symbol) = self.table.symbol(&candidate) {
                symbols.push(symbol.clone());
                candidate.clear();
            } else if candidate.len() >= max_code_length {
                // no code word is longer, the candidate can never match
                return self.reject_or_discard(candidate, symbols);
            }
        }
        if candidate.is_empty() {
            return Ok(symbols);
        }
        self.reject_or_discard(candidate, symbols)
    }

    fn reject_or_discard(&self, candidate: BitString, symbols: Vec<S>) -> Result<Vec<S>> {
        match self.trailing_bits {
            TrailingBits::Reject => Err(Error::Decode {
                remainder: candidate.to_string(),
                decoded: symbols.len(),
            }),
            TrailingBits::Discard => {
                log::warn!(
                    "Discarding undecodable bits starting with {} after {} symbols",
                    candidate,
                    symbols.len()
                );
                Ok(symbols)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::{HuffmanDecoder, TrailingBits};
    use crate::error::Error;
    use crate::huffman::{BitString, CodeTable, SymbolCode};

    fn code(bits: &str) -> BitString {
        bits.parse().unwrap()
    }

    fn reference_table() -> CodeTable<char> {
        let codes = [
            ('B', code("0")),
            ('C', code("10")),
            ('A', code("110")),
            ('D', code("1110")),
            ('E', code("1111")),
        ]
        .map(SymbolCode::from);
        CodeTable::from_codes(codes).unwrap()
    }

    #[test]
    fn test_decode_reference_bits() {
        let table = reference_table();
        let decoded = HuffmanDecoder::new(&table)
            .decode(&code("1110110111101001101000010"))
            .unwrap();
        let decoded: String = decoded.into_iter().collect();
        assert_eq!(decoded, "DAEBCBACBBBC");
    }

    #[test]
    fn test_decode_empty_bits() {
        let table = reference_table();
        let decoded = HuffmanDecoder::new(&table).decode(&BitString::new()).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_decode_truncated_bits() {
        let table = reference_table();
        let result = HuffmanDecoder::new(&table).decode(&code("0101"));
        match result {
            Err(Error::Decode { remainder, decoded }) => {
                assert_eq!(remainder, "1");
                assert_eq!(decoded, 2);
            }
            _ => panic!("Truncated input not detected"),
        }
    }

    #[test]
    fn test_discard_trailing_bits() {
        let table = reference_table();
        let decoded = HuffmanDecoder::new(&table)
            .with_trailing_bits(TrailingBits::Discard)
            .decode(&code("01001"))
            .unwrap();
        assert_eq!(decoded, ['B', 'C', 'B']);
    }

    #[test]
    fn test_decode_stops_at_bits_matching_no_code() {
        let codes = [('x', code("0")), ('y', code("10"))].map(SymbolCode::from);
        let table = CodeTable::from_codes(codes).unwrap();
        let result = HuffmanDecoder::new(&table).decode(&code("0100110100"));
        match result {
            Err(Error::Decode { remainder, decoded }) => {
                assert_eq!(remainder, "11");
                assert_eq!(decoded, 3);
            }
            _ => panic!("Bits matching no code not detected"),
        }
    }

    #[test]
    fn test_discard_stops_at_bits_matching_no_code() {
        let codes = [('x', code("0")), ('y', code("10"))].map(SymbolCode::from);
        let table = CodeTable::from_codes(codes).unwrap();
        let decoded = HuffmanDecoder::new(&table)
            .with_trailing_bits(TrailingBits::Discard)
            .decode(&code("0100110100"))
            .unwrap();
        assert_eq!(decoded, ['x', 'y', 'x']);
    }

    #[test]
    fn test_long_corrupt_run_keeps_remainder_short() {
        let codes = [('a', code("0"))].map(SymbolCode::from);
        let table = CodeTable::from_codes(codes).unwrap();
        let bits: BitString = std::iter::repeat(true).take(100_000).collect();
        let result = HuffmanDecoder::new(&table).decode(&bits);
        match result {
            Err(Error::Decode { remainder, decoded }) => {
                assert!(remainder.len() <= table.max_code_length());
                assert_eq!(decoded, 0);
            }
            _ => panic!("Corrupt run not detected"),
        }
    }

    #[test]
    fn test_decode_without_codes() {
        let table = CodeTable::<char>::default();
        let result = HuffmanDecoder::new(&table).decode(&code("0"));
        assert!(matches!(result, Err(Error::Decode { decoded: 0, .. })));
    }
}
