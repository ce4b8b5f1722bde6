mod code;
mod decoder;
mod encoder;
mod frequency;
mod tree;

pub use code::{Code, CodeTable, MAX_CODE_LENGTH};
pub use decoder::HuffmanDecoder;
pub use encoder::{EncodedStream, HuffmanEncoder};
pub use frequency::{FrequencyTable, SymbolFrequency};
pub use tree::HuffmanTree;

use crate::Result;

pub type Symbol = char;

/// Counts the symbols of `text`, builds the Huffman tree over the counts
/// and derives the code table from it.
pub fn build_code_table(text: &str) -> Result<(CodeTable, HuffmanTree)> {
    let frequencies = FrequencyTable::from(text);
    let tree = HuffmanTree::new(&frequencies)?;
    let table = CodeTable::from_tree(&tree)?;
    Ok((table, tree))
}

pub fn encode(text: &str, table: &CodeTable) -> Result<EncodedStream> {
    HuffmanEncoder::new(table).encode(text.chars())
}

pub fn decode(bits: &EncodedStream, table: &CodeTable) -> Result<String> {
    HuffmanDecoder::new(table).decode(bits.iter())
}
