//! Mnemonic validation
//!
//! Checks word count, wordlist membership and the embedded checksum of
//! free-text input, reporting the first failure as a structured error.

use crate::entropy;
use crate::phrase::{normalize_mnemonic, Phrase};
use crate::wordlist::Wordlist;
use crate::{Error, Result};
use serde::Serialize;
use subwallet_params::WordCountPolicy;

/// Validate phrase text under a word-count policy
pub fn validate(text: &str, policy: WordCountPolicy) -> Result<Phrase> {
    let normalized = normalize_mnemonic(text);
    let words: Vec<&str> = if normalized.is_empty() {
        Vec::new()
    } else {
        normalized.split(' ').collect()
    };

    check_word_count(words.len(), policy)?;

    let list = Wordlist::english();
    let indices = words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            list.word_to_index(word).ok_or_else(|| Error::UnknownWord {
                word: word.to_string(),
                position: i + 1,
            })
        })
        .collect::<Result<Vec<u16>>>()?;

    validate_indices(&indices, policy)
}

/// Validate a sequence of word indices under a word-count policy
pub fn validate_indices(indices: &[u16], policy: WordCountPolicy) -> Result<Phrase> {
    check_word_count(indices.len(), policy)?;

    let decoded = entropy::decode(indices)?;
    if !decoded.is_valid() {
        tracing::debug!("Checksum mismatch on {}-word phrase", indices.len());
        return Err(Error::ChecksumMismatch);
    }

    Phrase::assemble(indices.to_vec())
}

fn check_word_count(count: usize, policy: WordCountPolicy) -> Result<()> {
    let status = policy.classify(count);
    if status.is_ok() {
        return Ok(());
    }
    tracing::debug!("Rejected word count {} ({:?}) under {:?}", count, status, policy);
    Err(Error::WordCountMismatch {
        got: count,
        expected: policy.accepted(),
    })
}

/// Whether text is a valid 12- or 24-word phrase
pub fn validate_mnemonic(text: &str) -> bool {
    validate(text, WordCountPolicy::Import).is_ok()
}

/// Validation report for import screens
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportValidation {
    /// Whether the phrase can be imported
    pub is_valid: bool,
    /// Number of words after normalization
    pub word_count: usize,
    /// Reason for rejection
    #[serde(skip)]
    pub error: Option<Error>,
    /// Display text of `error`
    pub message: Option<String>,
}

/// Validate text for import and report word count alongside any error
pub fn validate_mnemonic_for_import(text: &str) -> ImportValidation {
    let normalized = normalize_mnemonic(text);
    let word_count = if normalized.is_empty() {
        0
    } else {
        normalized.split(' ').count()
    };

    match validate(&normalized, WordCountPolicy::Import) {
        Ok(_) => ImportValidation {
            is_valid: true,
            word_count,
            error: None,
            message: None,
        },
        Err(e) => ImportValidation {
            is_valid: false,
            word_count,
            message: Some(e.to_string()),
            error: Some(e),
        },
    }
}
