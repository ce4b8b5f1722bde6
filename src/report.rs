use std::fmt::{self, Display};
use std::time::Duration;

/// Statistics of a single compression run.
#[derive(Clone, Debug)]
pub struct CompressionReport {
    pub symbol_count: usize,
    pub distinct_symbol_count: usize,
    pub original_bytes: usize,
    pub encoded_bits: usize,
    pub compressed_bytes: usize,
    pub codebook_bytes: usize,
    pub elapsed: Duration,
}

impl CompressionReport {
    /// compressed size as a percentage of the original size
    pub fn compression_ratio(&self) -> f64 {
        if self.original_bytes == 0 {
            return 0.0;
        }
        self.compressed_bytes as f64 / self.original_bytes as f64 * 100.0
    }

    pub fn average_code_length(&self) -> f64 {
        if self.symbol_count == 0 {
            return 0.0;
        }
        self.encoded_bits as f64 / self.symbol_count as f64
    }
}

impl Display for CompressionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Runtime: {:.3} ms", self.elapsed.as_secs_f64() * 1000.0)?;
        writeln!(
            f,
            "Symbols: {} ({} distinct)",
            self.symbol_count, self.distinct_symbol_count
        )?;
        writeln!(f, "Original file size: {} bits", self.original_bytes * 8)?;
        writeln!(f, "Compressed file size: {} bits", self.compressed_bytes * 8)?;
        writeln!(f, "Codebook file size: {} bits", self.codebook_bytes * 8)?;
        writeln!(
            f,
            "Average code length: {:.3} bits",
            self.average_code_length()
        )?;
        write!(f, "Compression ratio: {:.2}%", self.compression_ratio())
    }
}
