//! Binary file holding an encoded stream.
//!
//! Layout: the number of valid bits as a big-endian `u64`, followed by the
//! bits packed most significant bit first. The last byte is zero padded,
//! the recorded bit count tells the reader where the stream ends.

use std::io::{self, Write};

use crate::error::Error;
use crate::huffman::EncodedStream;
use crate::Result;

const HEADER_LENGTH: usize = 8;

pub fn packed_size(stream: &EncodedStream) -> usize {
    HEADER_LENGTH + stream.as_bytes().len()
}

pub fn write_packed_stream<W: Write>(writer: &mut W, stream: &EncodedStream) -> io::Result<()> {
    writer.write_all(&(stream.len() as u64).to_be_bytes())?;
    writer.write_all(stream.as_bytes())?;
    writer.flush()
}

pub fn read_packed_stream(content: &[u8]) -> Result<EncodedStream> {
    if content.len() < HEADER_LENGTH {
        return Err(Error::CorruptPackedStream("missing bit count header"));
    }
    let (header, payload) = content.split_at(HEADER_LENGTH);
    let mut bit_count = [0; HEADER_LENGTH];
    bit_count.copy_from_slice(header);
    let bit_count = usize::try_from(u64::from_be_bytes(bit_count))
        .map_err(|_| Error::CorruptPackedStream("bit count exceeds addressable memory"))?;
    EncodedStream::from_packed(payload.to_vec(), bit_count)
}

#[cfg(test)]
mod test {
    use super::{packed_size, read_packed_stream, write_packed_stream};
    use crate::error::Error;
    use crate::huffman::EncodedStream;

    fn bits(digits: &str) -> EncodedStream {
        digits.chars().map(|digit| digit == '1').collect()
    }

    #[test]
    fn test_write_packed_stream_layout() {
        let stream = bits("1110101100");
        let mut output = Vec::new();
        write_packed_stream(&mut output, &stream).unwrap();
        assert_eq!(output, vec![0, 0, 0, 0, 0, 0, 0, 10, 0b1110_1011, 0b0000_0000]);
        assert_eq!(packed_size(&stream), output.len());
    }

    #[test]
    fn test_partial_last_byte_is_kept() {
        // 9 bits, the final bit must not be dropped
        let stream = bits("101010101");
        let mut output = Vec::new();
        write_packed_stream(&mut output, &stream).unwrap();
        let restored = read_packed_stream(&output).unwrap();
        assert_eq!(restored, stream);
        assert_eq!(restored.to_string(), "101010101");
    }

    #[test]
    fn test_empty_stream() {
        let mut output = Vec::new();
        write_packed_stream(&mut output, &EncodedStream::default()).unwrap();
        assert_eq!(output.len(), 8);
        assert!(read_packed_stream(&output).unwrap().is_empty());
    }

    #[test]
    fn test_read_rejects_truncated_content() {
        assert!(matches!(
            read_packed_stream(&[0, 0, 0]),
            Err(Error::CorruptPackedStream(_))
        ));
        let header_claims_more_bits = [0, 0, 0, 0, 0, 0, 0, 17, 0xFF, 0xFF];
        assert!(matches!(
            read_packed_stream(&header_claims_more_bits),
            Err(Error::CorruptPackedStream(_))
        ));
    }
}
