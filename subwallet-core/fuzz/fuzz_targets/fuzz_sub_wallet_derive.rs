//! Fuzz test for sub-wallet derivation
//!
//! First 16 bytes are master entropy, the next byte picks a slot (possibly out of range).

#![no_main]

use libfuzzer_sys::fuzz_target;
use subwallet_core::{derive_sub_wallet_mnemonic, validate_mnemonic, Error, Phrase};

fuzz_target!(|data: &[u8]| {
    if data.len() < 17 {
        return;
    }
    let master = Phrase::from_entropy(&data[..16]).expect("16 bytes always encode");
    let slot = data[16] as i64 - 8;

    match derive_sub_wallet_mnemonic(master.as_str(), slot) {
        Ok(derived) => {
            assert!((0..20).contains(&slot));
            assert!(validate_mnemonic(&derived));
        }
        Err(Error::SlotOutOfRange(got)) => assert_eq!(got, slot),
        Err(e) => panic!("unexpected derivation failure: {}", e),
    }
});
