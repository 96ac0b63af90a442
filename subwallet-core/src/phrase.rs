//! Validated mnemonic phrase
//!
//! A [`Phrase`] can only be obtained through validation, generation or
//! derivation, so holding one proves the words exist in the wordlist and
//! the checksum matches. Text, indices and decoded entropy are zeroized
//! on drop.

use crate::entropy;
use crate::validator::{validate, validate_indices};
use crate::{Error, Result};
use rand::{CryptoRng, RngCore};
use std::fmt;
use subwallet_params::WordCountPolicy;
use zeroize::Zeroizing;

/// Normalize user-supplied phrase text.
///
/// Trims, lowercases, and collapses every run of whitespace (spaces, tabs,
/// newlines, `\r\n`) into a single ASCII space.
pub fn normalize_mnemonic(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// A validated mnemonic phrase
#[derive(Clone)]
pub struct Phrase {
    text: Zeroizing<String>,
    indices: Zeroizing<Vec<u16>>,
}

impl Phrase {
    /// Parse and validate text under the import policy (12 or 24 words)
    pub fn parse(text: &str) -> Result<Self> {
        validate(text, WordCountPolicy::Import)
    }

    /// Parse and validate text as a 12-word sub-wallet master
    pub fn parse_sub_wallet(text: &str) -> Result<Self> {
        validate(text, WordCountPolicy::SubWallet)
    }

    /// Build from word indices, verifying the checksum
    pub fn from_indices(indices: &[u16], policy: WordCountPolicy) -> Result<Self> {
        validate_indices(indices, policy)
    }

    /// Encode entropy as a phrase
    pub fn from_entropy(entropy: &[u8]) -> Result<Self> {
        let indices = entropy::entropy_to_indices(entropy)?;
        Self::assemble(indices)
    }

    /// Generate a fresh 12-word phrase from `rng`
    pub fn generate_with<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        let indices = entropy::generate_indices_with(rng)?;
        Self::assemble(indices)
    }

    /// Assemble from indices already known to carry a valid checksum
    pub(crate) fn assemble(indices: Vec<u16>) -> Result<Self> {
        let words = entropy::indices_to_words(&indices)?;
        Ok(Self {
            text: Zeroizing::new(words.join(" ")),
            indices: Zeroizing::new(indices),
        })
    }

    /// Normalized phrase text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Words in order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.text.split(' ')
    }

    /// Number of words
    pub fn word_count(&self) -> usize {
        self.indices.len()
    }

    /// Wordlist indices in order
    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    /// Decoded entropy bytes
    pub fn entropy(&self) -> Result<Zeroizing<Vec<u8>>> {
        let decoded = entropy::decode(&self.indices)?;
        if !decoded.is_valid() {
            return Err(Error::ChecksumMismatch);
        }
        Ok(decoded.entropy)
    }

    /// Copy the normalized text out
    pub fn to_zeroizing_string(&self) -> Zeroizing<String> {
        self.text.clone()
    }
}

impl PartialEq for Phrase {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Phrase {}

impl fmt::Debug for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Phrase({} words, redacted)", self.word_count())
    }
}

impl std::str::FromStr for Phrase {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Phrase::parse(s)
    }
}
