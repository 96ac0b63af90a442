//! Error types for Subwallet Core
//!
//! Error taxonomy for phrase validation, checksum math and sub-wallet derivation.

use std::fmt;
use subwallet_params::policy::describe_counts;

/// Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Subwallet Core errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Phrase has a word count the context does not accept
    #[error("Mnemonic must be {} words, got {}", describe_counts(.expected), .got)]
    WordCountMismatch {
        /// Number of words supplied
        got: usize,
        /// Accepted word counts
        expected: &'static [usize],
    },

    /// Word is not in the wordlist
    #[error("Unknown word '{word}' at position {position}")]
    UnknownWord {
        /// The offending word (normalized)
        word: String,
        /// One-based position within the phrase
        position: usize,
    },

    /// Text could not be interpreted as a phrase at all
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Phrase fails its embedded checksum
    #[error("Invalid mnemonic: checksum mismatch")]
    ChecksumMismatch,

    /// Wordlist index outside 0..=2047
    #[error("Word index out of range: {0}")]
    IndexOutOfRange(usize),

    /// Sub-wallet slot outside 0..=19
    #[error("Sub-wallet index out of range: {0} (expected 0..=19)")]
    SlotOutOfRange(i64),

    /// Master phrase cannot be used for sub-wallet derivation
    #[error("Invalid master mnemonic: {0}")]
    InvalidMasterMnemonic(String),

    /// Checksum solver was handed a prefix it cannot complete
    #[error("No checksum word found: {0}")]
    NoChecksumWordFound(String),

    /// Derived phrase failed re-validation
    #[error("Derivation invariant violated: {0}")]
    DerivationInvariantViolation(String),

    /// Entropy has an unsupported length
    #[error("Invalid entropy: {0}")]
    InvalidEntropy(String),
}

impl Error {
    /// Check if error is a user-facing error (vs contract or internal error)
    pub fn is_user_error(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::InputFormat | ErrorCategory::Checksum
        )
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Error::WordCountMismatch { expected, .. } => {
                format!(
                    "Recovery phrase must be {} words. Please check and try again.",
                    describe_counts(expected)
                )
            }
            Error::UnknownWord { word, position } => {
                format!(
                    "Word {} (\"{}\") is not a valid recovery phrase word. Please check the spelling.",
                    position, word
                )
            }
            Error::ChecksumMismatch => {
                "The recovery phrase is invalid. Please check the words and their order.".to_string()
            }
            Error::MalformedInput(_) => {
                "The recovery phrase could not be read. Please check and try again.".to_string()
            }
            _ => self.to_string(),
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::WordCountMismatch { .. } | Error::UnknownWord { .. } | Error::MalformedInput(_) => {
                ErrorCategory::InputFormat
            }
            Error::ChecksumMismatch => ErrorCategory::Checksum,
            Error::IndexOutOfRange(_) | Error::SlotOutOfRange(_) => ErrorCategory::Range,
            Error::InvalidMasterMnemonic(_)
            | Error::NoChecksumWordFound(_)
            | Error::DerivationInvariantViolation(_)
            | Error::InvalidEntropy(_) => ErrorCategory::Internal,
        }
    }
}

/// Error categories for classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Wrong word count, unknown word, unreadable text
    InputFormat,
    /// Embedded checksum does not match
    Checksum,
    /// Slot or wordlist index out of bounds (caller contract)
    Range,
    /// Contract violations and internal consistency failures
    Internal,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::InputFormat => write!(f, "InputFormat"),
            ErrorCategory::Checksum => write!(f, "Checksum"),
            ErrorCategory::Range => write!(f, "Range"),
            ErrorCategory::Internal => write!(f, "Internal"),
        }
    }
}
