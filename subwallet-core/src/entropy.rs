//! Entropy codec
//!
//! Converts between raw entropy plus its SHA-256 checksum bits and sequences
//! of 11-bit word indices. For a 12-word phrase the 132 encoded bits are 128
//! bits of entropy followed by the leading 4 bits of `SHA256(entropy)`.

use crate::wordlist::Wordlist;
use crate::{Error, Result};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use sha2::{Digest, Sha256};
use subwallet_params::{BITS_PER_WORD, CODEC_WORD_COUNTS, MAX_WORD_INDEX};
use zeroize::Zeroizing;

/// Entropy bytes of a 12-word phrase
pub const ENTROPY_BYTES_12: usize = 16;

/// Checksum bits carried by a phrase with `entropy_len` bytes of entropy
pub const fn checksum_bits(entropy_len: usize) -> usize {
    entropy_len * 8 / 32
}

/// Leading `checksum_bits(entropy.len())` bits of SHA-256 over the entropy,
/// right-aligned in the returned byte
pub fn checksum_of(entropy: &[u8]) -> Result<u8> {
    check_entropy_len(entropy.len())?;
    let hash = Sha256::digest(entropy);
    Ok(hash[0] >> (8 - checksum_bits(entropy.len())))
}

fn check_entropy_len(len: usize) -> Result<()> {
    if (16..=32).contains(&len) && len % 4 == 0 {
        Ok(())
    } else {
        Err(Error::InvalidEntropy(format!(
            "entropy must be 16, 20, 24, 28 or 32 bytes, got {}",
            len
        )))
    }
}

fn check_word_count(count: usize) -> Result<()> {
    if CODEC_WORD_COUNTS.contains(&count) {
        Ok(())
    } else {
        Err(Error::MalformedInput(format!(
            "cannot decode a {}-word phrase",
            count
        )))
    }
}

/// Encode entropy (with its computed checksum) as word indices
pub fn entropy_to_indices(entropy: &[u8]) -> Result<Vec<u16>> {
    check_entropy_len(entropy.len())?;

    let mut bytes = Zeroizing::new(Vec::with_capacity(entropy.len() + 1));
    bytes.extend_from_slice(entropy);
    bytes.push(checksum_of(entropy)? << (8 - checksum_bits(entropy.len())));

    let word_count = (entropy.len() * 8 + checksum_bits(entropy.len())) / BITS_PER_WORD;
    let indices = (0..word_count)
        .map(|word| {
            (0..BITS_PER_WORD).fold(0u16, |acc, bit| {
                let pos = word * BITS_PER_WORD + bit;
                let set = (bytes[pos / 8] >> (7 - pos % 8)) & 1;
                (acc << 1) | set as u16
            })
        })
        .collect();

    Ok(indices)
}

/// Result of reassembling a phrase's bits
pub struct Decoded {
    /// Entropy bits, packed big-endian
    pub entropy: Zeroizing<Vec<u8>>,
    /// Checksum carried by the final word
    pub checksum: u8,
    /// Checksum recomputed from the entropy
    pub expected: u8,
}

impl Decoded {
    /// Whether the carried checksum matches the recomputed one
    pub fn is_valid(&self) -> bool {
        self.checksum == self.expected
    }
}

/// Reassemble entropy and checksum from word indices
pub fn decode(indices: &[u16]) -> Result<Decoded> {
    check_word_count(indices.len())?;
    if let Some(&bad) = indices.iter().find(|&&i| i > MAX_WORD_INDEX) {
        return Err(Error::IndexOutOfRange(bad as usize));
    }

    let total_bits = indices.len() * BITS_PER_WORD;
    let cs_bits = total_bits / 33;
    let entropy_len = (total_bits - cs_bits) / 8;

    let mut bytes = Zeroizing::new(vec![0u8; (total_bits + 7) / 8]);
    for (word, &index) in indices.iter().enumerate() {
        for bit in 0..BITS_PER_WORD {
            if index & (1 << (BITS_PER_WORD - 1 - bit)) != 0 {
                let pos = word * BITS_PER_WORD + bit;
                bytes[pos / 8] |= 1 << (7 - pos % 8);
            }
        }
    }

    let checksum = bytes[entropy_len] >> (8 - cs_bits);
    let entropy = Zeroizing::new(bytes[..entropy_len].to_vec());
    let expected = checksum_of(&entropy)?;

    Ok(Decoded {
        entropy,
        checksum,
        expected,
    })
}

/// Whether the indices form a phrase with a matching checksum
pub fn verify(indices: &[u16]) -> bool {
    decode(indices).map(|d| d.is_valid()).unwrap_or(false)
}

/// Generate 12 word indices from 128 bits drawn from `rng`
pub fn generate_indices_with<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Vec<u16>> {
    let mut entropy = Zeroizing::new([0u8; ENTROPY_BYTES_12]);
    rng.fill_bytes(&mut entropy[..]);
    entropy_to_indices(&entropy[..])
}

/// Generate 12 words from the operating system's secure random source
pub fn generate_words() -> Result<Vec<&'static str>> {
    indices_to_words(&generate_indices_with(&mut OsRng)?)
}

/// Map indices to their words
pub fn indices_to_words(indices: &[u16]) -> Result<Vec<&'static str>> {
    let list = Wordlist::english();
    indices
        .iter()
        .map(|&i| list.index_to_word(i as usize))
        .collect()
}
