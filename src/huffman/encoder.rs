use super::bits::BitString;
use super::code::CodeTable;
use super::Symbol;
use crate::error::Error;
use crate::Result;

/// Substitutes every symbol of a sequence by its code word.
pub struct HuffmanEncoder<'a, S> {
    table: &'a CodeTable<S>,
}

impl<'a, S: Symbol> HuffmanEncoder<'a, S> {
    pub fn new(table: &'a CodeTable<S>) -> Self {
        HuffmanEncoder { table }
    }

    pub fn encode(&self, symbols: &[S]) -> Result<BitString> {
        let mut bits = BitString::with_capacity(self.encoded_length(symbols)?);
        for symbol in symbols {
            // every symbol was looked up by encoded_length already
            if let Some(code) = self.table.code(symbol) {
                bits.append(code);
            }
        }
        Ok(bits)
    }

    /// Exact number of bits `symbols` encode to.
    pub fn encoded_length(&self, symbols: &[S]) -> Result<usize> {
        symbols
            .iter()
            .enumerate()
            .try_fold(0usize, |length, (position, symbol)| {
                let code = self
                    .table
                    .code(symbol)
                    .ok_or(Error::UnknownSymbol { position })?;
                Ok(length + code.len())
            })
    }
}

#[cfg(test)]
mod test {
    use super::HuffmanEncoder;
    use crate::error::Error;
    use crate::huffman::{BitString, CodeTable, HuffmanTree, SymbolCode};

    fn code(bits: &str) -> BitString {
        bits.parse().unwrap()
    }

    #[test]
    fn test_encode_reference_input() {
        let symbols: Vec<char> = "DAEBCBACBBBC".chars().collect();
        let table = CodeTable::from_tree(&HuffmanTree::from_symbols(&symbols).unwrap());
        let bits = HuffmanEncoder::new(&table).encode(&symbols).unwrap();
        assert_eq!(bits.to_string(), "1110110111101001101000010");
    }

    #[test]
    fn test_encode_with_supplied_table() {
        let codes = [(1u8, code("11")), (2, code("0")), (3, code("10"))].map(SymbolCode::from);
        let table = CodeTable::from_codes(codes).unwrap();
        let bits = HuffmanEncoder::new(&table).encode(&[3, 2, 1, 2]).unwrap();
        assert_eq!(bits.to_string(), "100110");
    }

    #[test]
    fn test_encode_unknown_symbol() {
        let codes = [(1u8, code("1")), (2, code("0"))].map(SymbolCode::from);
        let table = CodeTable::from_codes(codes).unwrap();
        let result = HuffmanEncoder::new(&table).encode(&[1, 2, 9, 1]);
        assert!(matches!(result, Err(Error::UnknownSymbol { position: 2 })));
    }

    #[test]
    fn test_reserve_exact_length_for_skewed_input() {
        let mut symbols = vec![0u8; 10_000];
        let mut count = 1;
        for symbol in 1..20u8 {
            symbols.extend(std::iter::repeat(symbol).take(count));
            count += symbol as usize;
        }
        let table = CodeTable::from_tree(&HuffmanTree::from_symbols(&symbols).unwrap());
        let encoder = HuffmanEncoder::new(&table);
        let bits = encoder.encode(&symbols).unwrap();
        assert_eq!(encoder.encoded_length(&symbols).unwrap(), bits.len());
        assert!(bits.capacity() >= bits.len());
        assert!(
            bits.capacity() < symbols.len() * table.max_code_length() / 2,
            "Reserved {} bits for {} encoded bits",
            bits.capacity(),
            bits.len()
        );
    }

    #[test]
    fn test_encoded_length_of_unknown_symbol() {
        let codes = [(1u8, code("1")), (2, code("0"))].map(SymbolCode::from);
        let table = CodeTable::from_codes(codes).unwrap();
        let result = HuffmanEncoder::new(&table).encoded_length(&[2, 5]);
        assert!(matches!(result, Err(Error::UnknownSymbol { position: 1 })));
    }

    #[test]
    fn test_encode_nothing() {
        let table = CodeTable::<u8>::default();
        let bits = HuffmanEncoder::new(&table).encode(&[]).unwrap();
        assert!(bits.is_empty());
    }
}
