use std::{
    fs::{self, File, OpenOptions},
    io::{BufWriter, Read, Write},
    path::{Path, PathBuf},
    time::Instant,
};

use clap::{builder::PossibleValue, ValueEnum};

pub use cli::CLIParser;
pub use error::Error;
pub use huffman::{build_code_table, decode, encode};
pub use report::CompressionReport;
use storage::{
    codebook::{format_codebook, parse_codebook},
    packed::{packed_size, read_packed_stream, write_packed_stream},
};

pub mod binary_stream;
mod cli;
mod error;
pub mod huffman;
mod logger;
mod report;
pub mod storage;

pub type Result<T> = std::result::Result<T, error::Error>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mode {
    Compress,
    Decompress,
}

impl ValueEnum for Mode {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Compress, Self::Decompress]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::Compress => Some(PossibleValue::new("Compress")),
            Self::Decompress => Some(PossibleValue::new("Decompress")),
        }
    }
}

pub struct Arguments {
    input_file: PathBuf,
    output_file: PathBuf,
    codebook_file: PathBuf,
    mode: Mode,
}

pub enum Outcome {
    Compressed(CompressionReport),
    /// number of restored symbols
    Decompressed(usize),
}

fn display_path(file_path: &Path) -> String {
    file_path.display().to_string()
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path)
        .map_err(|e| Error::UnableToOpenInputFileForReading(display_path(file_path), e))
}

fn open_output_file(file_path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| Error::UnableToOpenOutputFileForWriting(display_path(file_path), e))
}

fn read_input_bytes(file_path: &Path) -> Result<Vec<u8>> {
    let mut content = Vec::new();
    open_input_file(file_path)?
        .read_to_end(&mut content)
        .map_err(|e| Error::FailedToReadInputFile(display_path(file_path), e))?;
    Ok(content)
}

fn read_input_text(file_path: &Path) -> Result<String> {
    let mut content = String::new();
    open_input_file(file_path)?
        .read_to_string(&mut content)
        .map_err(|e| Error::FailedToReadInputFile(display_path(file_path), e))?;
    Ok(content)
}

// a file that could not be written completely is removed again
fn write_output(file_path: &Path, content: &[u8]) -> Result<()> {
    let output_file = open_output_file(file_path)?;
    let mut writer = BufWriter::new(&output_file);
    let result = writer.write_all(content).and_then(|_| writer.flush());
    if let Err(e) = result {
        drop(writer);
        let _ = fs::remove_file(file_path);
        return Err(Error::FailedToWriteOutputFile(display_path(file_path), e));
    }
    Ok(())
}

pub fn run(arguments: &Arguments) -> Result<Outcome> {
    match arguments.mode {
        Mode::Compress => compress_text_file(arguments).map(Outcome::Compressed),
        Mode::Decompress => decompress_text_file(arguments).map(Outcome::Decompressed),
    }
}

/// Encodes the input text and writes the packed stream and the codebook.
/// Nothing is written unless encoding succeeded.
pub fn compress_text_file(arguments: &Arguments) -> Result<CompressionReport> {
    let start = Instant::now();
    let text = read_input_text(&arguments.input_file)?;
    log::info!(
        "Read {} bytes from '{}'",
        text.len(),
        display_path(&arguments.input_file)
    );

    let (table, tree) = build_code_table(&text)?;
    log::debug!("Huffman tree\n{}", tree);
    logger::log_code_table(&table);
    let encoded = encode(&text, &table)?;
    log::info!(
        "Encoded {} symbols into {} bits using {} codes",
        tree.weight(),
        encoded.len(),
        table.len()
    );

    let codebook = format_codebook(&table);
    let mut packed = Vec::with_capacity(packed_size(&encoded));
    write_packed_stream(&mut packed, &encoded).map_err(Error::FailedToWriteBits)?;

    write_output(&arguments.codebook_file, codebook.as_bytes())?;
    if let Err(e) = write_output(&arguments.output_file, &packed) {
        let _ = fs::remove_file(&arguments.codebook_file);
        return Err(e);
    }

    Ok(CompressionReport {
        symbol_count: tree.weight(),
        distinct_symbol_count: tree.leaf_count(),
        original_bytes: text.len(),
        encoded_bits: encoded.len(),
        compressed_bytes: packed.len(),
        codebook_bytes: codebook.len(),
        elapsed: start.elapsed(),
    })
}

/// Restores the text of a packed file with the help of its codebook.
pub fn decompress_text_file(arguments: &Arguments) -> Result<usize> {
    let codebook = read_input_text(&arguments.codebook_file)?;
    let table = parse_codebook(&codebook)?;
    log::info!(
        "Loaded {} codes from '{}'",
        table.len(),
        display_path(&arguments.codebook_file)
    );
    logger::log_code_table(&table);

    let packed = read_input_bytes(&arguments.input_file)?;
    let encoded = read_packed_stream(&packed)?;
    let text = decode(&encoded, &table)?;
    let symbol_count = text.chars().count();
    log::info!("Decoded {} bits into {} symbols", encoded.len(), symbol_count);

    write_output(&arguments.output_file, text.as_bytes())?;
    Ok(symbol_count)
}
