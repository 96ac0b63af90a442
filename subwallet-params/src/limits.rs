//! Fixed constants of the 2048-word mnemonic encoding and the sub-wallet scheme

/// Number of entries in the wordlist
pub const WORDLIST_SIZE: usize = 2048;

/// Highest valid wordlist index
pub const MAX_WORD_INDEX: u16 = (WORDLIST_SIZE - 1) as u16;

/// Bits carried by a single word (2^11 = 2048)
pub const BITS_PER_WORD: usize = 11;

/// Word count of every sub-wallet phrase (128 bits entropy + 4 bits checksum)
pub const SUB_WALLET_WORD_COUNT: usize = 12;

/// Word counts accepted when importing a phrase from user text
pub const IMPORT_WORD_COUNTS: [usize; 2] = [12, 24];

/// Word counts the entropy codec understands (16 to 32 bytes of entropy)
pub const CODEC_WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

/// Number of sub-wallet slots per master key (slot 0 is the master itself)
pub const MAX_SUB_WALLETS: usize = 20;

/// Zero-based position of the word shifted by the slot index (the 11th word)
pub const SHIFTED_WORD_POSITION: usize = 10;

/// PBKDF2 rounds of the standard mnemonic-to-seed stretch
pub const SEED_STRETCH_ROUNDS: u32 = 2048;

/// Length of a stretched seed in bytes
pub const SEED_LEN: usize = 64;

/// Salt prefix of the standard mnemonic-to-seed stretch
pub const SEED_SALT_PREFIX: &str = "mnemonic";
