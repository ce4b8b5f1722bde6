use huffman_text_coder::huffman::{build_code_table, decode, encode};
use huffman_text_coder::Result;

fn main() -> Result<()> {
    let text = "abracadabra";

    let (table, tree) = build_code_table(text)?;
    println!("huffman tree\n{}", tree);
    println!("weighted path length: {}", tree.weighted_path_length());

    println!("code table");
    for (symbol, code) in table.iter() {
        println!("{:?} -> {}", symbol, code);
    }

    let encoded = encode(text, &table)?;
    println!("text to encode\n{}", text);
    println!("encoded sequence ({} bits)\n{}", encoded.len(), encoded);

    let decoded = decode(&encoded, &table)?;
    println!("decoded sequence\n{}", decoded);
    Ok(())
}
