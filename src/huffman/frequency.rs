use std::collections::HashMap;

use super::Symbol;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SymbolFrequency {
    pub symbol: Symbol,
    pub frequency: usize,
}

impl SymbolFrequency {
    pub fn new(symbol: Symbol, frequency: usize) -> Self {
        Self { symbol, frequency }
    }
}

impl From<(Symbol, usize)> for SymbolFrequency {
    fn from(value: (Symbol, usize)) -> Self {
        Self::new(value.0, value.1)
    }
}

/// Occurrence counts of the symbols of a text.
///
/// Entries are kept in order of first occurrence, which the tree builder
/// relies on to break ties between equal frequencies.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<SymbolFrequency>,
    positions: HashMap<Symbol, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_symbol(&mut self, symbol: Symbol) {
        match self.positions.get(&symbol) {
            Some(&position) => self.entries[position].frequency += 1,
            None => {
                self.positions.insert(symbol, self.entries.len());
                self.entries.push(SymbolFrequency::new(symbol, 1));
            }
        }
    }

    pub fn frequency_of(&self, symbol: Symbol) -> Option<usize> {
        self.positions
            .get(&symbol)
            .map(|&position| self.entries[position].frequency)
    }

    /// number of distinct symbols
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// number of counted symbols
    pub fn total(&self) -> usize {
        self.entries.iter().map(|entry| entry.frequency).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = SymbolFrequency> + '_ {
        self.entries.iter().copied()
    }
}

impl FromIterator<Symbol> for FrequencyTable {
    fn from_iter<T: IntoIterator<Item = Symbol>>(symbols: T) -> Self {
        let mut table = Self::new();
        for symbol in symbols {
            table.increment_symbol(symbol);
        }
        table
    }
}

impl From<&str> for FrequencyTable {
    fn from(text: &str) -> Self {
        text.chars().collect()
    }
}
