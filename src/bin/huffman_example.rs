use static_huffman::huffman::{CodeBook, HuffmanCodec, HuffmanTree};
use static_huffman::Result;

fn main() -> Result<()> {
    let input: Vec<char> = "DAEBCBACBBBC".chars().collect();

    let tree = HuffmanTree::from_symbols(&input)?;
    println!("huffman tree\n{}", tree);

    let mut codec = HuffmanCodec::new();
    let encoded = codec.encode(&input)?;
    println!("input\n{}", input.iter().collect::<String>());
    if let Some(table) = codec.table() {
        for entry in table.codes() {
            println!("{:?} -> {}", entry.symbol, entry.code);
        }
    }
    println!("encoded\n{}", encoded);

    let decoded = codec.decode(&encoded)?;
    println!("decoded\n{}", decoded.iter().collect::<String>());

    let report = CodeBook::build(&input)?.report();
    println!("report\n{}", report);
    assert_eq!(decoded, input);
    Ok(())
}
