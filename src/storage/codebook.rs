//! Textual codebook, one `'<symbol>' <code>` entry per line.
//!
//! Symbols are written as escaped char literals so that whitespace,
//! quotes and control characters survive a round trip.

use crate::error::Error;
use crate::huffman::{Code, CodeTable, Symbol};
use crate::Result;

pub fn format_codebook(table: &CodeTable) -> String {
    table
        .iter()
        .map(|(symbol, code)| format!("'{}' {}\n", symbol.escape_debug(), code))
        .collect()
}

pub fn parse_codebook(content: &str) -> Result<CodeTable> {
    let mut entries = Vec::new();
    for (index, line) in content.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        let entry = parse_entry(line).map_err(|reason| Error::MalformedCodebook(index + 1, reason))?;
        entries.push(entry);
    }
    CodeTable::from_entries(entries)
}

fn parse_entry(line: &str) -> std::result::Result<(Symbol, Code), &'static str> {
    let rest = line
        .strip_prefix('\'')
        .ok_or("symbol must start with a quote")?;
    let (literal, digits) = rest.rsplit_once(' ').ok_or("missing code after symbol")?;
    let literal = literal
        .strip_suffix('\'')
        .ok_or("symbol must end with a quote")?;
    let symbol = unescape_symbol(literal).ok_or("symbol is not a single character")?;
    let code = digits.parse::<Code>()?;
    Ok((symbol, code))
}

fn unescape_symbol(literal: &str) -> Option<Symbol> {
    let mut chars = literal.chars();
    let symbol = match chars.next()? {
        '\\' => match chars.next()? {
            't' => '\t',
            'r' => '\r',
            'n' => '\n',
            '0' => '\0',
            '\\' => '\\',
            '\'' => '\'',
            '"' => '"',
            'u' => {
                let hex = chars.as_str().strip_prefix('{')?.strip_suffix('}')?;
                chars = "".chars();
                char::from_u32(u32::from_str_radix(hex, 16).ok()?)?
            }
            _ => return None,
        },
        plain => plain,
    };
    match chars.next() {
        Some(_) => None,
        None => Some(symbol),
    }
}
