use std::fmt;
use std::io::Write;

use super::{CodeTable, Symbol};
use crate::binary_stream::BitWriter;
use crate::error::Error;
use crate::Result;

/// Concatenated code words, packed most significant bit first.
/// The last byte is padded with zero bits, `len` is the exact bit count.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EncodedStream {
    bytes: Vec<u8>,
    bit_count: usize,
}

impl EncodedStream {
    pub fn from_packed(bytes: Vec<u8>, bit_count: usize) -> Result<EncodedStream> {
        if bytes.len() != bit_count.div_ceil(8) {
            return Err(Error::CorruptPackedStream(
                "byte length does not match the recorded bit count",
            ));
        }
        let used_bits_in_last_byte = bit_count % 8;
        let padding_is_clear = match bytes.last() {
            Some(&last) if used_bits_in_last_byte != 0 => last & (0xFF >> used_bits_in_last_byte) == 0,
            _ => true,
        };
        if !padding_is_clear {
            return Err(Error::CorruptPackedStream("padding bits are not zero"));
        }
        Ok(EncodedStream { bytes, bit_count })
    }

    /// number of bits
    pub fn len(&self) -> usize {
        self.bit_count
    }

    pub fn is_empty(&self) -> bool {
        self.bit_count == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.bit_count).map(|index| self.bytes[index / 8] & (0x80 >> (index % 8)) != 0)
    }

    fn push(&mut self, bit: bool) {
        let offset = self.bit_count % 8;
        if offset == 0 {
            self.bytes.push(0);
        }
        if bit {
            if let Some(last) = self.bytes.last_mut() {
                *last |= 0x80 >> offset;
            }
        }
        self.bit_count += 1;
    }
}

impl FromIterator<bool> for EncodedStream {
    fn from_iter<T: IntoIterator<Item = bool>>(bits: T) -> Self {
        let mut stream = EncodedStream::default();
        for bit in bits {
            stream.push(bit);
        }
        stream
    }
}

impl fmt::Display for EncodedStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

pub struct HuffmanEncoder<'a> {
    table: &'a CodeTable,
}

impl<'a> HuffmanEncoder<'a> {
    pub fn new(table: &'a CodeTable) -> Self {
        Self { table }
    }

    pub fn encode<I: IntoIterator<Item = Symbol>>(&self, symbols: I) -> Result<EncodedStream> {
        let mut bytes = Vec::new();
        let mut writer = BitWriter::new(&mut bytes);
        for symbol in symbols {
            let code = self
                .table
                .code_of(symbol)
                .ok_or(Error::MissingCode(symbol))?;
            writer
                .write_bits(&code.to_be_bytes(), code.len())
                .map_err(Error::FailedToWriteBits)?;
        }
        let bit_count = writer.bits_written();
        writer.flush().map_err(Error::FailedToWriteBits)?;
        Ok(EncodedStream { bytes, bit_count })
    }
}
