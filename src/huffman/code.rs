use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::tree::NodeKind;
use super::{HuffmanTree, Symbol};
use crate::error::Error;
use crate::Result;

pub const MAX_CODE_LENGTH: usize = u64::BITS as usize;

const LEADING_BIT: u64 = 1 << (u64::BITS - 1);

/// A code word of up to 64 bits, stored most significant bit first.
/// Bits past `length` are always zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Code {
    pattern: u64,
    length: usize,
}

impl Code {
    pub fn new() -> Code {
        Code::default()
    }

    /// returns a copy of this code extended by one bit
    pub fn push(self, bit: bool) -> Result<Code> {
        if self.length >= MAX_CODE_LENGTH {
            return Err(Error::CodeLengthLimitExceeded(MAX_CODE_LENGTH));
        }
        let mut extended = self;
        if bit {
            extended.pattern |= LEADING_BIT >> self.length;
        }
        extended.length += 1;
        Ok(extended)
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.length).map(|index| self.pattern & (LEADING_BIT >> index) != 0)
    }

    pub fn is_prefix_of(&self, other: &Code) -> bool {
        if self.length > other.length {
            return false;
        }
        let mask = match self.length {
            0 => 0,
            length => u64::MAX << (MAX_CODE_LENGTH - length),
        };
        other.pattern & mask == self.pattern
    }

    /// pattern bytes for `BitWriter::write_bits` together with `len`
    pub(super) fn to_be_bytes(self) -> [u8; 8] {
        self.pattern.to_be_bytes()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = &'static str;

    fn from_str(digits: &str) -> std::result::Result<Self, Self::Err> {
        if digits.len() > MAX_CODE_LENGTH {
            return Err("code is longer than 64 bits");
        }
        let mut code = Code::new();
        for digit in digits.chars() {
            let bit = match digit {
                '0' => false,
                '1' => true,
                _ => return Err("code may only contain the digits 0 and 1"),
            };
            code = code.push(bit).map_err(|_| "code is longer than 64 bits")?;
        }
        Ok(code)
    }
}

/// Maps every symbol to its code. Codes are pairwise prefix-free.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<Symbol, Code>,
}

impl CodeTable {
    /// Assigns each leaf the path from the root, a left edge contributes
    /// a 0 and a right edge a 1.
    pub fn from_tree(tree: &HuffmanTree) -> Result<CodeTable> {
        let mut codes = BTreeMap::new();
        let mut stack = vec![(tree.root().index, Code::new())];
        while let Some((index, code)) = stack.pop() {
            match tree.node(index).kind {
                NodeKind::Leaf { symbol } => {
                    codes.insert(symbol, code);
                }
                NodeKind::Stem { child } => stack.push((child, code.push(false)?)),
                NodeKind::Inner { left, right } => {
                    stack.push((right, code.push(true)?));
                    stack.push((left, code.push(false)?));
                }
            }
        }
        Ok(CodeTable { codes })
    }

    /// Builds a table from externally supplied codes, e.g. a loaded codebook.
    pub fn from_entries<I>(entries: I) -> Result<CodeTable>
    where
        I: IntoIterator<Item = (Symbol, Code)>,
    {
        let mut codes = BTreeMap::new();
        for (symbol, code) in entries {
            if code.is_empty() {
                return Err(Error::EmptyCode(symbol));
            }
            if codes.insert(symbol, code).is_some() {
                return Err(Error::DuplicateSymbol(symbol));
            }
        }
        if codes.is_empty() {
            return Err(Error::InvalidInput);
        }
        let table = CodeTable { codes };
        table.ensure_prefix_free()?;
        Ok(table)
    }

    // a prefix sorts directly before the codes it starts, so checking
    // neighbours in lexicographic order is sufficient
    fn ensure_prefix_free(&self) -> Result<()> {
        let mut sorted: Vec<(Vec<bool>, Symbol, &Code)> = self
            .codes
            .iter()
            .map(|(&symbol, code)| (code.bits().collect(), symbol, code))
            .collect();
        sorted.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(&b.1)));
        for pair in sorted.windows(2) {
            let (_, prefix_symbol, prefix_code) = &pair[0];
            let (_, symbol, code) = &pair[1];
            if prefix_code.is_prefix_of(code) {
                return Err(Error::AmbiguousCodes(*prefix_symbol, *symbol));
            }
        }
        Ok(())
    }

    pub fn code_of(&self, symbol: Symbol) -> Option<Code> {
        self.codes.get(&symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn max_code_length(&self) -> usize {
        self.codes.values().map(Code::len).max().unwrap_or(0)
    }

    /// entries in ascending symbol order
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, Code)> + '_ {
        self.codes.iter().map(|(&symbol, &code)| (symbol, code))
    }
}
