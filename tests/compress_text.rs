use huffman_text_coder::{run, CLIParser, Error, Outcome};
use std::path::{Path, PathBuf};
use std::{env, fs, process};

const INPUT_TEXT_PATH: &str = "tests/sample.txt";

fn get_project_root_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn get_input_text_path() -> PathBuf {
    let mut root_path = get_project_root_path();
    root_path.push(INPUT_TEXT_PATH);
    root_path
}

// every test gets its own files, tests run in parallel
fn get_scratch_path(test_name: &str, file_name: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!(
        "huffman-text-coder-{}-{}-{}",
        process::id(),
        test_name,
        file_name
    ));
    path
}

fn cleanup(paths: &[&PathBuf]) {
    for path in paths {
        if path.exists() && path.is_file() {
            fs::remove_file(path).expect("Deletion of scratch file failed");
        }
    }
}

fn run_with(arguments: &[&str]) -> huffman_text_coder::Result<Outcome> {
    let mut cli_parser = CLIParser::new();
    let mut command_line = vec!["test"];
    command_line.extend_from_slice(arguments);
    run(&cli_parser.parse(command_line))
}

fn compress_then_decompress(test_name: &str, input_path: &Path) -> String {
    let packed_path = get_scratch_path(test_name, "compressed.bin");
    let codebook_path = get_scratch_path(test_name, "codes.txt");
    let restored_path = get_scratch_path(test_name, "restored.txt");
    cleanup(&[&packed_path, &codebook_path, &restored_path]);

    let outcome = run_with(&[
        input_path.to_str().unwrap(),
        packed_path.to_str().unwrap(),
        "--codebook_file",
        codebook_path.to_str().unwrap(),
    ])
    .expect("Compression failed");
    assert!(matches!(outcome, Outcome::Compressed(_)));
    assert!(packed_path.exists(), "Packed file was not created");
    assert!(codebook_path.exists(), "Codebook file was not created");

    let outcome = run_with(&[
        packed_path.to_str().unwrap(),
        restored_path.to_str().unwrap(),
        "--codebook_file",
        codebook_path.to_str().unwrap(),
        "--mode",
        "Decompress",
    ])
    .expect("Decompression failed");
    assert!(matches!(outcome, Outcome::Decompressed(_)));

    let restored = fs::read_to_string(&restored_path).expect("Restored file is not readable");
    cleanup(&[&packed_path, &codebook_path, &restored_path]);
    restored
}

#[test]
fn test_compress_and_decompress_text_file() {
    let input_path = get_input_text_path();
    let original = fs::read_to_string(&input_path).unwrap();
    let restored = compress_then_decompress("sample", &input_path);
    assert_eq!(restored, original);
}

#[test]
fn test_compression_report() {
    let input_path = get_input_text_path();
    let packed_path = get_scratch_path("report", "compressed.bin");
    let codebook_path = get_scratch_path("report", "codes.txt");
    let outcome = run_with(&[
        input_path.to_str().unwrap(),
        packed_path.to_str().unwrap(),
        "-c",
        codebook_path.to_str().unwrap(),
    ])
    .expect("Compression failed");
    let Outcome::Compressed(report) = outcome else {
        panic!("Compression must produce a report");
    };
    let original = fs::read_to_string(&input_path).unwrap();
    assert_eq!(report.original_bytes, original.len());
    assert_eq!(report.symbol_count, original.chars().count());
    assert_eq!(
        report.compressed_bytes as u64,
        fs::metadata(&packed_path).unwrap().len()
    );
    assert!(report.compressed_bytes < report.original_bytes);
    assert!(report.average_code_length() < 8.0);
    cleanup(&[&packed_path, &codebook_path]);
}

#[test]
fn test_single_symbol_file() {
    let input_path = get_scratch_path("single", "input.txt");
    fs::write(&input_path, "aaaaaaaaaaa").unwrap();
    let restored = compress_then_decompress("single", &input_path);
    assert_eq!(restored, "aaaaaaaaaaa");
    cleanup(&[&input_path]);
}

#[test]
fn test_empty_file_is_rejected_without_output() {
    let input_path = get_scratch_path("empty", "input.txt");
    let packed_path = get_scratch_path("empty", "compressed.bin");
    let codebook_path = get_scratch_path("empty", "codes.txt");
    cleanup(&[&packed_path, &codebook_path]);
    fs::write(&input_path, "").unwrap();
    let result = run_with(&[
        input_path.to_str().unwrap(),
        packed_path.to_str().unwrap(),
        "-c",
        codebook_path.to_str().unwrap(),
    ]);
    assert!(matches!(result, Err(Error::InvalidInput)));
    assert!(!packed_path.exists(), "No packed file may be written");
    assert!(!codebook_path.exists(), "No codebook may be written");
    cleanup(&[&input_path]);
}

#[test]
fn test_missing_input_file() {
    let input_path = get_scratch_path("missing", "does-not-exist.txt");
    let packed_path = get_scratch_path("missing", "compressed.bin");
    let result = run_with(&[input_path.to_str().unwrap(), packed_path.to_str().unwrap()]);
    assert!(matches!(
        result,
        Err(Error::UnableToOpenInputFileForReading(_, _))
    ));
}

#[test]
fn test_decompress_with_foreign_codebook_fails() {
    let packed_path = get_scratch_path("foreign", "compressed.bin");
    let codebook_path = get_scratch_path("foreign", "codes.txt");
    let restored_path = get_scratch_path("foreign", "restored.txt");
    // 5 bits of 1s, the codebook only knows '0'
    fs::write(&packed_path, [0, 0, 0, 0, 0, 0, 0, 5, 0b1111_1000]).unwrap();
    fs::write(&codebook_path, "'x' 0\n").unwrap();
    let result = run_with(&[
        packed_path.to_str().unwrap(),
        restored_path.to_str().unwrap(),
        "-c",
        codebook_path.to_str().unwrap(),
        "-m",
        "Decompress",
    ]);
    assert!(matches!(result, Err(Error::MalformedStream(_))));
    assert!(!restored_path.exists(), "No restored file may be written");
    cleanup(&[&packed_path, &codebook_path]);
}
