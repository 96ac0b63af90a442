//! Word-count policies
//!
//! Import screens accept 12 or 24 words while sub-wallet derivation only
//! works on 12-word phrases. The check is expressed as a tagged status so
//! callers never have to match on message text.

use crate::limits::{IMPORT_WORD_COUNTS, SUB_WALLET_WORD_COUNT};
use serde::{Deserialize, Serialize};

const SUB_WALLET_WORD_COUNTS: [usize; 1] = [SUB_WALLET_WORD_COUNT];

/// Context a phrase is validated in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordCountPolicy {
    /// General import of a master phrase (12 or 24 words)
    Import,
    /// Master phrase used for sub-wallet derivation (exactly 12 words)
    SubWallet,
}

/// Outcome of a word-count check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordCountStatus {
    /// Count is accepted by the policy
    Ok,
    /// Fewer words than the smallest accepted count
    TooShort,
    /// More words than the largest accepted count
    TooLong,
    /// Within range but not one of the accepted counts
    Unsupported,
}

impl WordCountPolicy {
    /// Accepted word counts, ascending
    pub const fn accepted(&self) -> &'static [usize] {
        match self {
            WordCountPolicy::Import => &IMPORT_WORD_COUNTS,
            WordCountPolicy::SubWallet => &SUB_WALLET_WORD_COUNTS,
        }
    }

    /// Classify a word count against this policy
    pub fn classify(&self, count: usize) -> WordCountStatus {
        let accepted = self.accepted();
        if accepted.contains(&count) {
            return WordCountStatus::Ok;
        }
        match (accepted.first(), accepted.last()) {
            (Some(&min), _) if count < min => WordCountStatus::TooShort,
            (_, Some(&max)) if count > max => WordCountStatus::TooLong,
            _ => WordCountStatus::Unsupported,
        }
    }

    /// Human-readable accepted counts, e.g. "12 or 24"
    pub fn describe(&self) -> String {
        describe_counts(self.accepted())
    }
}

impl Default for WordCountPolicy {
    fn default() -> Self {
        WordCountPolicy::Import
    }
}

/// Join word counts as "12", "12 or 24", "12, 18 or 24"
pub fn describe_counts(counts: &[usize]) -> String {
    match counts {
        [] => String::new(),
        [only] => only.to_string(),
        [init @ .., last] => {
            let head: Vec<String> = init.iter().map(|c| c.to_string()).collect();
            format!("{} or {}", head.join(", "), last)
        }
    }
}

impl WordCountStatus {
    /// Whether the count passed
    pub fn is_ok(&self) -> bool {
        matches!(self, WordCountStatus::Ok)
    }
}
