//! Subwallet core
//!
//! This crate implements the deterministic multi-wallet engine: 12/24-word
//! mnemonic encoding and validation, the checksum-word solver, word-shift
//! sub-wallet derivation for up to 20 slots per master phrase, slot
//! allocation and duplicate-wallet detection.
//!
//! Nothing here performs I/O or holds mutable global state; every function
//! is safe to call concurrently.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod derive;
pub mod duplicate;
pub mod entropy;
pub mod error;
pub mod nickname;
pub mod phrase;
pub mod slots;
pub mod solver;
pub mod validator;
pub mod wordlist;

#[cfg(feature = "test-helpers")]
pub mod test_vectors;

pub use derive::{derive_sub_wallet_mnemonic, SubWallet, SubWalletDeriver};
pub use duplicate::{is_duplicate_mnemonic, DuplicateDetector, Pbkdf2SeedStretcher, Seed, SeedStretcher};
pub use error::{Error, ErrorCategory, Result};
pub use nickname::{master_nickname, slot_nickname};
pub use phrase::{normalize_mnemonic, Phrase};
pub use slots::{next_available, SlotAvailability, SlotIndex};
pub use solver::{checksum_candidates, solve_checksum_word, VALID_CANDIDATES_PER_PREFIX};
pub use validator::{validate_mnemonic, validate_mnemonic_for_import, ImportValidation};
pub use wordlist::{index_to_word, word_to_index, Wordlist};
pub use subwallet_params::{EngineConfig, WordCountPolicy, WordCountStatus, MAX_SUB_WALLETS};

/// Generate a new 12-word master phrase from the OS secure random source
pub fn generate_mnemonic() -> Result<Phrase> {
    Phrase::generate_with(&mut rand::rngs::OsRng)
}

/// Lowest free slot among `used`, or `Full`
pub fn get_next_available_index(used: impl IntoIterator<Item = u8>) -> SlotAvailability {
    next_available(used)
}
