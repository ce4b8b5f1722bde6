use std::fmt::Display;

use crate::huffman::Symbol;

#[derive(Debug)]
pub enum Error {
    InvalidInput,
    MissingCode(Symbol),
    MalformedStream(String),
    CodeLengthLimitExceeded(usize),
    EmptyCode(Symbol),
    DuplicateSymbol(Symbol),
    AmbiguousCodes(Symbol, Symbol),
    MalformedCodebook(usize, &'static str),
    CorruptPackedStream(&'static str),
    FailedToWriteBits(std::io::Error),
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToOpenOutputFileForWriting(String, std::io::Error),
    FailedToReadInputFile(String, std::io::Error),
    FailedToWriteOutputFile(String, std::io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput => {
                write!(f, "Unable to build a code table from an empty input")
            }
            Self::MissingCode(symbol) => {
                write!(f, "Symbol {:?} has no code in the code table", symbol)
            }
            Self::MalformedStream(pending_bits) => {
                write!(
                    f,
                    "Encoded stream contains bits '{}' that do not resolve to any code",
                    pending_bits
                )
            }
            Self::CodeLengthLimitExceeded(limit) => {
                write!(f, "Code word exceeds the maximum length of {} bits", limit)
            }
            Self::EmptyCode(symbol) => {
                write!(f, "Symbol {:?} is assigned an empty code", symbol)
            }
            Self::DuplicateSymbol(symbol) => {
                write!(f, "Symbol {:?} is listed more than once", symbol)
            }
            Self::AmbiguousCodes(prefix_symbol, symbol) => {
                write!(
                    f,
                    "Code of symbol {:?} is a prefix of the code of symbol {:?}",
                    prefix_symbol, symbol
                )
            }
            Self::MalformedCodebook(line, reason) => {
                write!(f, "Codebook line {} is malformed: {}", line, reason)
            }
            Self::CorruptPackedStream(reason) => {
                write!(f, "Packed stream is corrupt: {}", reason)
            }
            Self::FailedToWriteBits(error) => {
                write!(f, "Failed to write encoded bits: {}", error)
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::FailedToReadInputFile(path, error) => {
                write!(f, "Failed to read input file '{}': {}", path, error)
            }
            Self::FailedToWriteOutputFile(path, error) => {
                write!(f, "Failed to write output file '{}': {}", path, error)
            }
        }
    }
}

impl std::error::Error for Error {}
