//! Property-based tests for the streaming engine
//!
//! Round-trip fidelity must hold for arbitrary payloads and chunk
//! sizes: the output is exactly the input, regardless of how the reads
//! happen to split it.

use std::io::{Read, Seek};

use proptest::prelude::*;
use tempfile::{NamedTempFile, TempDir};

use dripcat::{engine, Input, RunConfig};

fn stream(payload: &[u8], chunk_size: usize) -> Vec<u8> {
    let dir = TempDir::new().unwrap();
    let input_path = dir.path().join("payload.bin");
    std::fs::write(&input_path, payload).unwrap();

    let config = RunConfig::resolve(
        vec![Input::Path(input_path)],
        Some(chunk_size),
        None,
        false,
        None,
    )
    .unwrap();

    let mut out = NamedTempFile::new().unwrap();
    engine::run(&config, out.as_file_mut()).unwrap();
    out.as_file_mut().rewind().unwrap();
    let mut bytes = Vec::new();
    out.as_file_mut().read_to_end(&mut bytes).unwrap();
    bytes
}

proptest! {
    // File I/O per case; keep the case count moderate
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_round_trip_arbitrary_payloads(
        payload in prop::collection::vec(any::<u8>(), 0..4096),
        chunk_size in 1usize..600,
    ) {
        prop_assert_eq!(stream(&payload, chunk_size), payload);
    }

    #[test]
    fn test_concatenation_matches_manual_join(
        first in prop::collection::vec(any::<u8>(), 0..512),
        second in prop::collection::vec(any::<u8>(), 0..512),
    ) {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.bin");
        let b = dir.path().join("b.bin");
        std::fs::write(&a, &first).unwrap();
        std::fs::write(&b, &second).unwrap();

        let config = RunConfig::resolve(
            vec![Input::Path(a), Input::Path(b)],
            None,
            None,
            false,
            None,
        )
        .unwrap();

        let mut out = NamedTempFile::new().unwrap();
        engine::run(&config, out.as_file_mut()).unwrap();
        out.as_file_mut().rewind().unwrap();
        let mut bytes = Vec::new();
        out.as_file_mut().read_to_end(&mut bytes).unwrap();

        let mut expected = first.clone();
        expected.extend_from_slice(&second);
        prop_assert_eq!(bytes, expected);
    }
}
