//! Checksum word solver
//!
//! The 12th word of a 12-word phrase carries 7 trailing entropy bits and
//! the 4 checksum bits. Each of the 2^7 tail values fixes the full 128-bit
//! entropy and therefore exactly one checksum, so exactly 128 of the 2048
//! candidate words complete any 11-word prefix. The solver returns the
//! lowest-index one.

use crate::entropy;
use crate::{Error, Result};
use subwallet_params::{MAX_WORD_INDEX, SUB_WALLET_WORD_COUNT, WORDLIST_SIZE};

/// Number of final words that complete any 11-word prefix
pub const VALID_CANDIDATES_PER_PREFIX: usize = 128;

const PREFIX_LEN: usize = SUB_WALLET_WORD_COUNT - 1;

fn trial_phrase(prefix: &[u16]) -> Result<[u16; SUB_WALLET_WORD_COUNT]> {
    if prefix.len() != PREFIX_LEN {
        return Err(Error::NoChecksumWordFound(format!(
            "prefix must be {} words, got {}",
            PREFIX_LEN,
            prefix.len()
        )));
    }
    if let Some(&bad) = prefix.iter().find(|&&i| i > MAX_WORD_INDEX) {
        return Err(Error::NoChecksumWordFound(format!(
            "prefix index {} outside wordlist",
            bad
        )));
    }

    let mut trial = [0u16; SUB_WALLET_WORD_COUNT];
    trial[..PREFIX_LEN].copy_from_slice(prefix);
    Ok(trial)
}

/// Find the smallest final word index that completes `prefix`
pub fn solve_checksum_word(prefix: &[u16]) -> Result<u16> {
    let mut trial = trial_phrase(prefix)?;

    for candidate in 0..WORDLIST_SIZE as u16 {
        trial[PREFIX_LEN] = candidate;
        if entropy::verify(&trial) {
            return Ok(candidate);
        }
    }

    // Unreachable for a well-formed prefix: 128 candidates always validate.
    tracing::error!("No checksum word completes an 11-word prefix");
    Err(Error::NoChecksumWordFound(
        "no candidate satisfies the checksum".to_string(),
    ))
}

/// Every final word index that completes `prefix`, ascending
pub fn checksum_candidates(prefix: &[u16]) -> Result<Vec<u16>> {
    let mut trial = trial_phrase(prefix)?;

    let candidates: Vec<u16> = (0..WORDLIST_SIZE as u16)
        .filter(|&candidate| {
            trial[PREFIX_LEN] = candidate;
            entropy::verify(&trial)
        })
        .collect();

    tracing::debug!("{} checksum candidates for prefix", candidates.len());
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlist::word_to_index;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_all_abandon_prefix_solves_to_about() {
        let solved = solve_checksum_word(&[0u16; 11]).unwrap();
        assert_eq!(solved, word_to_index("about").unwrap());
    }

    #[test]
    fn test_all_zoo_prefix() {
        let prefix = [2047u16; 11];
        let solved = solve_checksum_word(&prefix).unwrap();
        let mut phrase = prefix.to_vec();
        phrase.push(solved);
        assert!(entropy::verify(&phrase));
    }

    #[test]
    fn test_exactly_128_candidates() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..8 {
            let prefix: Vec<u16> = (0..11).map(|_| rng.gen_range(0..2048)).collect();
            let candidates = checksum_candidates(&prefix).unwrap();
            assert_eq!(candidates.len(), VALID_CANDIDATES_PER_PREFIX);
            assert_eq!(candidates[0], solve_checksum_word(&prefix).unwrap());
            assert!(candidates.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_one_candidate_per_tail_value() {
        // Each candidate's top 7 bits (the entropy tail) is distinct.
        let candidates = checksum_candidates(&[0u16; 11]).unwrap();
        let mut tails: Vec<u16> = candidates.iter().map(|c| c >> 4).collect();
        tails.dedup();
        assert_eq!(tails.len(), VALID_CANDIDATES_PER_PREFIX);
    }

    #[test]
    fn test_solver_is_deterministic() {
        let prefix = [5u16, 900, 17, 2047, 0, 1, 1024, 333, 42, 1999, 3];
        let first = solve_checksum_word(&prefix).unwrap();
        for _ in 0..3 {
            assert_eq!(solve_checksum_word(&prefix).unwrap(), first);
        }
    }

    #[test]
    fn test_rejects_bad_prefix() {
        assert!(matches!(
            solve_checksum_word(&[0u16; 10]),
            Err(Error::NoChecksumWordFound(_))
        ));
        assert!(matches!(
            solve_checksum_word(&[0u16; 12]),
            Err(Error::NoChecksumWordFound(_))
        ));
        let mut prefix = [0u16; 11];
        prefix[3] = 2048;
        assert!(matches!(
            checksum_candidates(&prefix),
            Err(Error::NoChecksumWordFound(_))
        ));
    }
}
