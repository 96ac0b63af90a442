//! Fixed bijection between the 2048 English mnemonic words and their 11-bit indices

use crate::{Error, Result};
use bip39::Language;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use subwallet_params::{MAX_WORD_INDEX, WORDLIST_SIZE};

static ENGLISH: Lazy<Wordlist> = Lazy::new(|| Wordlist::new(Language::English.word_list()));

/// Immutable, ordered wordlist with a reverse lookup table
pub struct Wordlist {
    words: &'static [&'static str; WORDLIST_SIZE],
    positions: HashMap<&'static str, u16>,
}

impl Wordlist {
    fn new(words: &'static [&'static str; WORDLIST_SIZE]) -> Self {
        let positions = words
            .iter()
            .enumerate()
            .map(|(i, word)| (*word, i as u16))
            .collect();
        Self { words, positions }
    }

    /// The English wordlist, built on first use
    pub fn english() -> &'static Wordlist {
        &ENGLISH
    }

    /// Look up a word's index. Surrounding whitespace and case are ignored.
    pub fn word_to_index(&self, word: &str) -> Option<u16> {
        let trimmed = word.trim();
        if let Some(&index) = self.positions.get(trimmed) {
            return Some(index);
        }
        self.positions.get(trimmed.to_lowercase().as_str()).copied()
    }

    /// Resolve an index to its word
    pub fn index_to_word(&self, index: usize) -> Result<&'static str> {
        self.words
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfRange(index))
    }

    /// First word of the list (index 0)
    pub fn first(&self) -> &'static str {
        self.words[0]
    }

    /// Last word of the list (index 2047)
    pub fn last(&self) -> &'static str {
        self.words[MAX_WORD_INDEX as usize]
    }

    /// Number of words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; present for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Look up a word in the English wordlist
pub fn word_to_index(word: &str) -> Option<u16> {
    Wordlist::english().word_to_index(word)
}

/// Resolve an index in the English wordlist
pub fn index_to_word(index: usize) -> Result<&'static str> {
    Wordlist::english().index_to_word(index)
}
