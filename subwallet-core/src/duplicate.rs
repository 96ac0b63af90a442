//! Duplicate wallet detection
//!
//! Two phrases name the same wallet when their stretched seeds match. The
//! stretch is the standard mnemonic-to-seed PBKDF2 (2048 rounds of
//! HMAC-SHA512, salt "mnemonic", empty passphrase) and costs milliseconds
//! per phrase, so seeds of known wallets are cached by wallet id. Each
//! cache entry carries a SHA-256 fingerprint of the phrase it was stretched
//! from and is recomputed when a wallet id arrives with different text.

use crate::phrase::normalize_mnemonic;
use parking_lot::RwLock;
use sha2::{Digest, Sha256, Sha512};
use std::collections::HashMap;
use subwallet_params::{EngineConfig, SEED_LEN, SEED_SALT_PREFIX, SEED_STRETCH_ROUNDS};
use zeroize::Zeroizing;

/// Stretched seed bytes
pub type Seed = Zeroizing<[u8; SEED_LEN]>;

type Fingerprint = [u8; 32];

struct CachedSeed {
    fingerprint: Fingerprint,
    seed: Seed,
}

/// Deterministic phrase-to-seed transform
pub trait SeedStretcher: Send + Sync {
    /// Stretch already-normalized phrase text into a seed
    fn stretch(&self, normalized: &str) -> Seed;
}

/// Standard PBKDF2-HMAC-SHA512 mnemonic-to-seed stretch with an empty passphrase
#[derive(Debug, Clone, Copy, Default)]
pub struct Pbkdf2SeedStretcher;

impl SeedStretcher for Pbkdf2SeedStretcher {
    fn stretch(&self, normalized: &str) -> Seed {
        let mut seed = Zeroizing::new([0u8; SEED_LEN]);
        pbkdf2::pbkdf2_hmac::<Sha512>(
            normalized.as_bytes(),
            SEED_SALT_PREFIX.as_bytes(),
            SEED_STRETCH_ROUNDS,
            &mut seed[..],
        );
        seed
    }
}

/// Compares stretched seeds to reject re-imports of a known wallet
pub struct DuplicateDetector<S = Pbkdf2SeedStretcher> {
    stretcher: S,
    cache_enabled: bool,
    cache: RwLock<HashMap<String, CachedSeed>>,
}

impl DuplicateDetector<Pbkdf2SeedStretcher> {
    /// Create a caching detector with the standard stretch
    pub fn new() -> Self {
        Self::with_stretcher(Pbkdf2SeedStretcher, true)
    }

    /// Create a detector honoring `config.cache_seeds`
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::with_stretcher(Pbkdf2SeedStretcher, config.cache_seeds)
    }
}

impl Default for DuplicateDetector<Pbkdf2SeedStretcher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SeedStretcher> DuplicateDetector<S> {
    /// Create a detector around a custom stretcher
    pub fn with_stretcher(stretcher: S, cache_enabled: bool) -> Self {
        Self {
            stretcher,
            cache_enabled,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Stretch phrase text after normalizing it
    pub fn seed_of(&self, phrase: &str) -> Seed {
        let normalized = Zeroizing::new(normalize_mnemonic(phrase));
        self.stretcher.stretch(&normalized)
    }

    /// Whether `candidate` names the same wallet as any of `existing`.
    ///
    /// Stops at the first match. Nothing is cached.
    pub fn is_duplicate<I, T>(&self, candidate: &str, existing: I) -> bool
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let target = self.seed_of(candidate);
        existing
            .into_iter()
            .any(|phrase| *self.seed_of(phrase.as_ref()) == *target)
    }

    /// Whether `candidate` names the same wallet as any `(wallet_id, phrase)`
    /// pair, reusing cached seeds per wallet id.
    pub fn is_duplicate_among(&self, candidate: &str, wallets: &[(&str, &str)]) -> bool {
        let target = self.seed_of(candidate);
        let found = wallets
            .iter()
            .any(|(id, phrase)| *self.cached_seed(id, phrase) == *target);

        tracing::debug!(
            "Duplicate check against {} wallets: {}",
            wallets.len(),
            if found { "match" } else { "no match" }
        );
        found
    }

    fn cached_seed(&self, wallet_id: &str, phrase: &str) -> Seed {
        if !self.cache_enabled {
            return self.seed_of(phrase);
        }

        let normalized = Zeroizing::new(normalize_mnemonic(phrase));
        let fingerprint: Fingerprint = Sha256::digest(normalized.as_bytes()).into();
        if let Some(entry) = self.cache.read().get(wallet_id) {
            if entry.fingerprint == fingerprint {
                return entry.seed.clone();
            }
            tracing::debug!("Phrase of wallet {} changed, re-stretching", wallet_id);
        }

        let seed = self.stretcher.stretch(&normalized);
        self.cache.write().insert(
            wallet_id.to_string(),
            CachedSeed {
                fingerprint,
                seed: seed.clone(),
            },
        );
        tracing::debug!("Cached stretched seed for wallet {}", wallet_id);
        seed
    }

    /// Drop the cached seed of a wallet (call when it is removed)
    pub fn forget(&self, wallet_id: &str) {
        self.cache.write().remove(wallet_id);
    }

    /// Drop all cached seeds
    pub fn clear(&self) {
        self.cache.write().clear();
    }

    /// Number of cached seeds
    pub fn cached_len(&self) -> usize {
        self.cache.read().len()
    }
}

/// Whether `candidate` names the same wallet as any of `existing`
pub fn is_duplicate_mnemonic(candidate: &str, existing: &[&str]) -> bool {
    DuplicateDetector::with_stretcher(Pbkdf2SeedStretcher, false).is_duplicate(candidate, existing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const ABANDON_ABOUT: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
    const ZOO_WRONG: &str = "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo wrong";

    /// Cheap stand-in that counts invocations
    #[derive(Default, Clone)]
    struct CountingStretcher {
        calls: Arc<AtomicUsize>,
    }

    impl SeedStretcher for CountingStretcher {
        fn stretch(&self, normalized: &str) -> Seed {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let digest = Sha256::digest(normalized.as_bytes());
            let mut seed = Zeroizing::new([0u8; SEED_LEN]);
            seed[..32].copy_from_slice(&digest);
            seed
        }
    }

    #[test]
    fn test_matches_bip39_seed() {
        let ours = Pbkdf2SeedStretcher.stretch(ABANDON_ABOUT);
        let reference = bip39::Mnemonic::parse_normalized(ABANDON_ABOUT)
            .unwrap()
            .to_seed_normalized("");
        assert_eq!(&ours[..], &reference[..]);
    }

    #[test]
    fn test_duplicate_under_different_text() {
        let messy = format!("\t{}\r\n", ABANDON_ABOUT.to_uppercase().replace(' ', "   "));
        assert!(is_duplicate_mnemonic(&messy, &[ZOO_WRONG, ABANDON_ABOUT]));
        assert!(!is_duplicate_mnemonic(&messy, &[ZOO_WRONG]));
        assert!(!is_duplicate_mnemonic(ABANDON_ABOUT, &[]));
    }

    #[test]
    fn test_early_exit() {
        let stretcher = CountingStretcher::default();
        let calls = stretcher.calls.clone();
        let detector = DuplicateDetector::with_stretcher(stretcher, false);

        assert!(detector.is_duplicate(ABANDON_ABOUT, [ABANDON_ABOUT, ZOO_WRONG, ZOO_WRONG]));
        // candidate + first existing
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_cache_reuses_seeds() {
        let stretcher = CountingStretcher::default();
        let calls = stretcher.calls.clone();
        let detector = DuplicateDetector::with_stretcher(stretcher, true);
        let wallets = [("w1", ZOO_WRONG), ("w2", "legal winner thank year wave sausage worth useful legal winner thank yellow")];

        assert!(!detector.is_duplicate_among(ABANDON_ABOUT, &wallets));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(detector.cached_len(), 2);

        assert!(!detector.is_duplicate_among(ABANDON_ABOUT, &wallets));
        assert_eq!(calls.load(Ordering::SeqCst), 4);

        detector.forget("w1");
        assert_eq!(detector.cached_len(), 1);
        detector.clear();
        assert_eq!(detector.cached_len(), 0);
    }

    #[test]
    fn test_cached_and_uncached_agree() {
        let cached = DuplicateDetector::with_stretcher(CountingStretcher::default(), true);
        let uncached = DuplicateDetector::with_stretcher(CountingStretcher::default(), false);
        let wallets = [("a", ZOO_WRONG), ("b", ABANDON_ABOUT)];

        for candidate in [ABANDON_ABOUT, ZOO_WRONG, "ABANDON ability able about above absent absorb abstract absurd abuse access accident"] {
            let expected = uncached.is_duplicate(candidate, [ZOO_WRONG, ABANDON_ABOUT]);
            assert_eq!(cached.is_duplicate_among(candidate, &wallets), expected);
            assert_eq!(uncached.is_duplicate_among(candidate, &wallets), expected);
        }
        assert_eq!(uncached.cached_len(), 0);
    }

    #[test]
    fn test_reused_wallet_id_restretches() {
        let stretcher = CountingStretcher::default();
        let calls = stretcher.calls.clone();
        let detector = DuplicateDetector::with_stretcher(stretcher, true);

        assert!(!detector.is_duplicate_among(ZOO_WRONG, &[("w", ABANDON_ABOUT)]));
        assert!(detector.is_duplicate_among(ZOO_WRONG, &[("w", ZOO_WRONG)]));
        assert_eq!(detector.cached_len(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 4);

        // same phrase under different whitespace and case still hits the cache
        let messy = format!("  {}\n", ZOO_WRONG.to_uppercase());
        assert!(detector.is_duplicate_among(ZOO_WRONG, &[("w", messy.as_str())]));
        assert_eq!(calls.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn test_pbkdf2_cache_tracks_phrase_changes() {
        let detector = DuplicateDetector::new();
        assert!(!detector.is_duplicate_among(ZOO_WRONG, &[("w", ABANDON_ABOUT)]));
        assert!(detector.is_duplicate_among(ZOO_WRONG, &[("w", ZOO_WRONG)]));
        assert!(!detector.is_duplicate_among(ZOO_WRONG, &[("w", ABANDON_ABOUT)]));
    }

    #[test]
    fn test_from_config() {
        let config = EngineConfig {
            cache_seeds: false,
            ..EngineConfig::default()
        };
        let detector = DuplicateDetector::from_config(&config);
        assert!(detector.is_duplicate_among(ZOO_WRONG, &[("z", ZOO_WRONG)]));
        assert_eq!(detector.cached_len(), 0);
    }
}
