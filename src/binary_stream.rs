use std::io;
use std::io::Write;

const MOST_SIGNIFICANT_BIT: u8 = 0b1000_0000;

/// Packs individual bits into bytes, most significant bit first,
/// and forwards every completed byte to the wrapped writer.
pub struct BitWriter<'a, T: Write> {
    /// the underlying output stream
    writer: &'a mut T,
    /// bits of the byte currently being assembled
    pending_byte: u8,
    /// how many bits of `pending_byte` are in use
    pending_bit_count: u8,
    /// total number of bits accepted so far
    bits_written: usize,
}

impl<'a, T: Write> BitWriter<'a, T> {
    pub fn new(writer: &'a mut T) -> BitWriter<'a, T> {
        BitWriter {
            writer,
            pending_byte: 0,
            pending_bit_count: 0,
            bits_written: 0,
        }
    }

    /// write the first `count` bits of `buf`
    ///
    /// Bits are taken from `buf` most significant bit first. Bits that do not
    /// fill a whole byte stay buffered until more bits arrive or `flush`
    /// is called.
    pub fn write_bits(&mut self, buf: &[u8], count: usize) -> io::Result<()> {
        if count > buf.len() * 8 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "bit count exceeds buffer length",
            ));
        }
        let mut offset = 0;
        if self.pending_bit_count == 0 {
            // byte aligned, whole bytes can be passed through
            let whole_bytes = count / 8;
            self.writer.write_all(&buf[..whole_bytes])?;
            offset = whole_bytes * 8;
        }
        for bit_index in offset..count {
            let bit = buf[bit_index / 8] & (MOST_SIGNIFICANT_BIT >> (bit_index % 8)) != 0;
            self.push_bit(bit)?;
        }
        self.bits_written += count;
        Ok(())
    }

    pub fn bits_written(&self) -> usize {
        self.bits_written
    }

    fn push_bit(&mut self, bit: bool) -> io::Result<()> {
        if bit {
            self.pending_byte |= MOST_SIGNIFICANT_BIT >> self.pending_bit_count;
        }
        self.pending_bit_count += 1;
        if self.pending_bit_count == 8 {
            self.writer.write_all(&[self.pending_byte])?;
            self.pending_byte = 0;
            self.pending_bit_count = 0;
        }
        Ok(())
    }
}

impl<T: Write> Write for BitWriter<'_, T> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_bits(buf, buf.len() * 8)?;
        Ok(buf.len())
    }

    /// Writes a partially filled byte padded with zero bits, then flushes
    /// the underlying writer.
    fn flush(&mut self) -> io::Result<()> {
        if self.pending_bit_count != 0 {
            self.writer.write_all(&[self.pending_byte])?;
            self.pending_byte = 0;
            self.pending_bit_count = 0;
        }
        self.writer.flush()
    }
}
