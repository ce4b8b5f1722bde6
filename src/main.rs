use std::env::args_os;
use std::process::ExitCode;

use huffman_text_coder::{run, CLIParser, Outcome};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match run(&arguments) {
        Ok(Outcome::Compressed(report)) => {
            println!("Compression successful\n{}", report);
            ExitCode::SUCCESS
        }
        Ok(Outcome::Decompressed(symbol_count)) => {
            println!("Decompression successful, {} symbols restored", symbol_count);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Operation failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
