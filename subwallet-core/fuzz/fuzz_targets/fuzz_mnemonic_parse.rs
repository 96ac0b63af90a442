//! Fuzz test for phrase validation
//!
//! Arbitrary text must only ever produce a structured error, never a panic,
//! and anything accepted must round-trip through its entropy.

#![no_main]

use libfuzzer_sys::fuzz_target;
use subwallet_core::{normalize_mnemonic, validate_mnemonic_for_import, Phrase};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let report = validate_mnemonic_for_import(s);

        let normalized = normalize_mnemonic(s);
        assert_eq!(normalize_mnemonic(&normalized), normalized);

        if report.is_valid {
            let phrase = Phrase::parse(s).expect("report said valid");
            let entropy = phrase.entropy().expect("valid phrase decodes");
            let again = Phrase::from_entropy(&entropy).expect("entropy re-encodes");
            assert_eq!(again, phrase);
        }
    }
});
