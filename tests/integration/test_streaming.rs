//! Integration tests for end-to-end streaming
//!
//! Runs the engine against temp-file outputs (not terminals, so the
//! raw-mode guard stays inert) and checks the byte-level contract:
//! verbatim round trips, ordered multi-file concatenation, and the
//! reset preamble.

use std::io::{Read, Seek};
use std::path::Path;

use tempfile::{NamedTempFile, TempDir};

use dripcat::{engine, Input, RunConfig};

fn write_input(dir: &TempDir, name: &str, bytes: &[u8]) -> Input {
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).unwrap();
    Input::Path(path)
}

fn run_collecting(config: &RunConfig) -> Vec<u8> {
    let mut out = NamedTempFile::new().unwrap();
    engine::run(config, out.as_file_mut()).unwrap();
    out.as_file_mut().rewind().unwrap();
    let mut bytes = Vec::new();
    out.as_file_mut().read_to_end(&mut bytes).unwrap();
    bytes
}

#[test]
fn test_round_trip_all_byte_values() {
    let dir = TempDir::new().unwrap();
    let payload: Vec<u8> = (0..=255u8).collect();
    let input = write_input(&dir, "all-bytes.bin", &payload);

    let config = RunConfig::resolve(vec![input], None, None, false, None).unwrap();
    assert_eq!(run_collecting(&config), payload);
}

#[test]
fn test_round_trip_with_odd_chunk_size() {
    let dir = TempDir::new().unwrap();
    let payload: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
    let input = write_input(&dir, "payload.bin", &payload);

    // 7 does not divide 1000, so the last read is a short one
    let config = RunConfig::resolve(vec![input], Some(7), None, false, None).unwrap();
    assert_eq!(run_collecting(&config), payload);
}

#[test]
fn test_multi_file_concatenation_in_order() {
    let dir = TempDir::new().unwrap();
    let a = write_input(&dir, "a.bin", b"ab");
    let b = write_input(&dir, "b.bin", b"cd");

    let config = RunConfig::resolve(vec![a, b], None, None, false, None).unwrap();
    assert_eq!(run_collecting(&config), b"abcd");
}

#[test]
fn test_same_file_may_repeat() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "a.bin", b"xy");
    let again = input.clone();

    let config = RunConfig::resolve(vec![input, again], None, None, false, None).unwrap();
    assert_eq!(run_collecting(&config), b"xyxy");
}

#[test]
fn test_reset_precedes_all_content() {
    let dir = TempDir::new().unwrap();
    let a = write_input(&dir, "a.bin", b"hello");

    let config = RunConfig::resolve(vec![a], None, None, true, None).unwrap();
    let bytes = run_collecting(&config);
    assert_eq!(&bytes[..2], &[0x1B, b'c']);
    assert_eq!(&bytes[2..], b"hello");
}

#[test]
fn test_newlines_pass_through_untranslated() {
    let dir = TempDir::new().unwrap();
    let payload = b"line one\nline two\n";
    let input = write_input(&dir, "lines.txt", payload);

    let config = RunConfig::resolve(vec![input], None, None, false, None).unwrap();
    let bytes = run_collecting(&config);
    assert_eq!(bytes, payload);
    assert!(!bytes.windows(2).any(|w| w == b"\r\n"));
}

#[test]
fn test_paced_run_preserves_bytes() {
    let dir = TempDir::new().unwrap();
    let payload = b"paced payload";
    let input = write_input(&dir, "paced.bin", payload);

    let config = RunConfig::resolve(vec![input], Some(4), Some(1.0), false, None).unwrap();
    assert_eq!(run_collecting(&config), payload);
}

#[test]
fn test_empty_input_produces_empty_output() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "empty.bin", b"");

    let config = RunConfig::resolve(vec![input], None, None, false, None).unwrap();
    assert!(run_collecting(&config).is_empty());
    assert!(dir.path().join("empty.bin").exists());
}

#[test]
fn test_input_file_still_readable_after_run() {
    // One open/close cycle per file; the file itself is untouched.
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "a.bin", b"data");

    let config = RunConfig::resolve(vec![input], None, None, false, None).unwrap();
    run_collecting(&config);

    let path: &Path = &dir.path().join("a.bin");
    assert_eq!(std::fs::read(path).unwrap(), b"data");
}
