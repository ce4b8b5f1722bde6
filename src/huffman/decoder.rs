use std::collections::HashMap;

use super::{Code, CodeTable, Symbol};
use crate::error::Error;
use crate::Result;

/// Resolves a bit sequence back to symbols by growing a candidate code
/// bit by bit until it matches an entry of the code table.
pub struct HuffmanDecoder {
    symbols_by_code: HashMap<Code, Symbol>,
    max_code_length: usize,
}

impl HuffmanDecoder {
    pub fn new(table: &CodeTable) -> Self {
        Self {
            symbols_by_code: table.iter().map(|(symbol, code)| (code, symbol)).collect(),
            max_code_length: table.max_code_length(),
        }
    }

    pub fn decode<I: IntoIterator<Item = bool>>(&self, bits: I) -> Result<String> {
        let mut decoded = String::new();
        let mut candidate = Code::new();
        for bit in bits {
            candidate = candidate.push(bit)?;
            if let Some(&symbol) = self.symbols_by_code.get(&candidate) {
                decoded.push(symbol);
                candidate = Code::new();
            } else if candidate.len() >= self.max_code_length {
                // no longer code exists that could still match
                return Err(Error::MalformedStream(candidate.to_string()));
            }
        }
        if !candidate.is_empty() {
            return Err(Error::MalformedStream(candidate.to_string()));
        }
        Ok(decoded)
    }
}
