//! Fuzz test for the checksum solver
//!
//! Any 11 in-range indices must solve, and the answer must be the first of exactly 128 candidates.

#![no_main]

use libfuzzer_sys::fuzz_target;
use subwallet_core::{checksum_candidates, solve_checksum_word, VALID_CANDIDATES_PER_PREFIX};

fuzz_target!(|data: &[u8]| {
    if data.len() < 22 {
        return;
    }
    let prefix: Vec<u16> = data[..22]
        .chunks(2)
        .map(|c| u16::from_be_bytes([c[0], c[1]]) & 0x07ff)
        .collect();

    let solved = solve_checksum_word(&prefix).expect("in-range prefix always solves");
    let candidates = checksum_candidates(&prefix).expect("in-range prefix");
    assert_eq!(candidates.len(), VALID_CANDIDATES_PER_PREFIX);
    assert_eq!(candidates[0], solved);
});
