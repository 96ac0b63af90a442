//! Sub-wallet phrase derivation
//!
//! Slot N of a 12-word master phrase keeps words 1-10, shifts the 11th
//! word forward by N positions in the wordlist (wrapping past "zoo" to
//! "abandon") and recomputes the checksum word with the solver. Slot 0 is
//! the master phrase itself.
//!
//! This is a proprietary word-shift scheme, not path-based key derivation.
//! Every slot is an ordinary importable phrase and the master alone
//! regenerates all of them, but sibling slots differ structurally only in
//! the 11th word (about 11 bits) before the checksum word is recomputed.
//! Previously derived wallets depend on this exact mapping.

use crate::nickname::slot_nickname;
use crate::phrase::{normalize_mnemonic, Phrase};
use crate::slots::SlotIndex;
use crate::solver::solve_checksum_word;
use crate::validator::{validate, validate_indices};
use crate::{Error, Result};
use rayon::prelude::*;
use subwallet_params::{WordCountPolicy, SHIFTED_WORD_POSITION, WORDLIST_SIZE};

/// One derived slot of a master phrase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubWallet {
    /// Slot index
    pub slot: SlotIndex,
    /// Phrase for this slot
    pub phrase: Phrase,
    /// Display name
    pub nickname: String,
}

/// Derives sub-wallet phrases from a master phrase
#[derive(Debug, Clone, Copy)]
pub struct SubWalletDeriver {
    parallel: bool,
}

impl Default for SubWalletDeriver {
    fn default() -> Self {
        Self { parallel: true }
    }
}

impl SubWalletDeriver {
    /// Create a deriver; `parallel` spreads `derive_all` over the rayon pool
    pub fn new(parallel: bool) -> Self {
        Self { parallel }
    }

    /// Derive the phrase of `slot` from a validated 12-word master
    pub fn derive(&self, master: &Phrase, slot: SlotIndex) -> Result<Phrase> {
        if slot.is_main() {
            return Ok(master.clone());
        }
        if master.word_count() != subwallet_params::SUB_WALLET_WORD_COUNT {
            return Err(Error::InvalidMasterMnemonic(format!(
                "sub-wallets require a 12-word master, got {} words",
                master.word_count()
            )));
        }
        shift_and_solve(master.indices(), slot)
    }

    /// Derive all 20 slots, ordered by slot index
    pub fn derive_all(&self, master: &Phrase) -> Result<Vec<SubWallet>> {
        let build = |slot: SlotIndex| -> Result<SubWallet> {
            Ok(SubWallet {
                slot,
                phrase: self.derive(master, slot)?,
                nickname: slot_nickname(slot),
            })
        };

        let slots: Vec<SlotIndex> = SlotIndex::all().collect();
        let wallets = if self.parallel {
            slots.into_par_iter().map(build).collect::<Result<Vec<_>>>()?
        } else {
            slots.into_iter().map(build).collect::<Result<Vec<_>>>()?
        };

        tracing::info!("Derived {} sub-wallet slots", wallets.len());
        Ok(wallets)
    }
}

fn shift_and_solve(master: &[u16], slot: SlotIndex) -> Result<Phrase> {
    let shifted = (master[SHIFTED_WORD_POSITION] as usize + slot.as_u8() as usize) % WORDLIST_SIZE;

    let mut prefix = master[..=SHIFTED_WORD_POSITION].to_vec();
    prefix[SHIFTED_WORD_POSITION] = shifted as u16;

    let checksum_word = solve_checksum_word(&prefix)?;
    prefix.push(checksum_word);

    tracing::debug!(
        "Slot {}: shifted word index {} -> {}, checksum word {}",
        slot,
        master[SHIFTED_WORD_POSITION],
        shifted,
        checksum_word
    );

    validate_indices(&prefix, WordCountPolicy::SubWallet).map_err(|e| {
        tracing::error!("Derived phrase for slot {} failed re-validation: {}", slot, e);
        Error::DerivationInvariantViolation(format!("slot {}: {}", slot, e))
    })
}

/// Derive the phrase of slot `slot_index` from master phrase text.
///
/// Slot 0 returns the normalized master text unchanged. Every other slot
/// requires the master to be a valid 12-word phrase.
pub fn derive_sub_wallet_mnemonic(master: &str, slot_index: i64) -> Result<String> {
    let slot = SlotIndex::new(slot_index)?;
    let normalized = normalize_mnemonic(master);

    if slot.is_main() {
        return Ok(normalized);
    }

    let master = validate(&normalized, WordCountPolicy::SubWallet)
        .map_err(|e| Error::InvalidMasterMnemonic(e.to_string()))?;

    let derived = shift_and_solve(master.indices(), slot)?;
    Ok(derived.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlist::{index_to_word, word_to_index, Wordlist};

    const ABANDON_ABOUT: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_slot_zero_is_identity() {
        let messy = format!("  {}\n", ABANDON_ABOUT.to_uppercase());
        assert_eq!(derive_sub_wallet_mnemonic(&messy, 0).unwrap(), ABANDON_ABOUT);
    }

    #[test]
    fn test_slot_zero_skips_validation() {
        assert_eq!(
            derive_sub_wallet_mnemonic("Not A Phrase", 0).unwrap(),
            "not a phrase"
        );
    }

    #[test]
    fn test_slot_three_vector() {
        let derived = derive_sub_wallet_mnemonic(ABANDON_ABOUT, 3).unwrap();
        let words: Vec<&str> = derived.split(' ').collect();
        assert_eq!(words.len(), 12);
        assert!(words[..10].iter().all(|w| *w == "abandon"));
        assert_eq!(words[10], index_to_word(3).unwrap());
        assert_eq!(words[10], "about");
        assert!(crate::validator::validate_mnemonic(&derived));
    }

    #[test]
    fn test_range_enforced() {
        assert_eq!(
            derive_sub_wallet_mnemonic(ABANDON_ABOUT, -1),
            Err(Error::SlotOutOfRange(-1))
        );
        assert_eq!(
            derive_sub_wallet_mnemonic(ABANDON_ABOUT, 20),
            Err(Error::SlotOutOfRange(20))
        );
    }

    #[test]
    fn test_invalid_master_rejected() {
        let all_abandon = ["abandon"; 12].join(" ");
        assert!(matches!(
            derive_sub_wallet_mnemonic(&all_abandon, 1),
            Err(Error::InvalidMasterMnemonic(_))
        ));
        let master_24 = [["abandon"; 23].join(" ").as_str(), "art"].join(" ");
        assert!(matches!(
            derive_sub_wallet_mnemonic(&master_24, 1),
            Err(Error::InvalidMasterMnemonic(_))
        ));
    }

    #[test]
    fn test_wraparound() {
        // zoo x11 + wrong is valid; its 11th word is the last wordlist entry
        let master = "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo wrong";
        let derived = derive_sub_wallet_mnemonic(master, 1).unwrap();
        let words: Vec<&str> = derived.split(' ').collect();
        assert_eq!(words[10], Wordlist::english().first());
        assert!(words[..10].iter().all(|w| *w == "zoo"));
    }

    #[test]
    fn test_typed_and_text_forms_agree() {
        let deriver = SubWalletDeriver::new(false);
        let master = Phrase::parse_sub_wallet(ABANDON_ABOUT).unwrap();
        for slot in SlotIndex::all() {
            let typed = deriver.derive(&master, slot).unwrap();
            let text = derive_sub_wallet_mnemonic(ABANDON_ABOUT, slot.as_u8() as i64).unwrap();
            assert_eq!(typed.as_str(), text);
        }
    }

    #[test]
    fn test_derive_all_parallel_matches_sequential() {
        let master = Phrase::parse_sub_wallet(ABANDON_ABOUT).unwrap();
        let parallel = SubWalletDeriver::new(true).derive_all(&master).unwrap();
        let sequential = SubWalletDeriver::new(false).derive_all(&master).unwrap();
        assert_eq!(parallel, sequential);
        assert_eq!(parallel.len(), 20);
        assert_eq!(parallel[0].phrase, master);
        assert_eq!(parallel[0].nickname, "Main Wallet");
        assert_eq!(parallel[7].nickname, "Sub-Wallet 7");
    }

    #[test]
    fn test_shifted_words_pairwise_distinct() {
        let master = Phrase::parse_sub_wallet(ABANDON_ABOUT).unwrap();
        let wallets = SubWalletDeriver::default().derive_all(&master).unwrap();
        let mut eleventh: Vec<u16> = wallets.iter().map(|w| w.phrase.indices()[10]).collect();
        eleventh.sort_unstable();
        eleventh.dedup();
        assert_eq!(eleventh.len(), 20);
        assert_eq!(word_to_index("abandon"), Some(wallets[0].phrase.indices()[10]));
    }

    #[test]
    fn test_typed_derive_rejects_24_word_master() {
        let master_24 = [["abandon"; 23].join(" ").as_str(), "art"].join(" ");
        let master = Phrase::parse(&master_24).unwrap();
        let deriver = SubWalletDeriver::default();
        assert!(deriver.derive(&master, SlotIndex::MAIN).is_ok());
        assert!(matches!(
            deriver.derive(&master, SlotIndex::MAX),
            Err(Error::InvalidMasterMnemonic(_))
        ));
    }
}
