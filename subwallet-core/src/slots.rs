//! Sub-wallet slot indices and allocation
//!
//! Each master key owns up to 20 slots. Slot 0 is the master phrase itself.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use subwallet_params::MAX_SUB_WALLETS;

/// Sub-wallet slot index (0..=19)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct SlotIndex(u8);

impl SlotIndex {
    /// The master slot
    pub const MAIN: SlotIndex = SlotIndex(0);

    /// Highest slot index
    pub const MAX: SlotIndex = SlotIndex((MAX_SUB_WALLETS - 1) as u8);

    /// Create a slot index, failing loudly when out of range
    pub fn new(index: i64) -> Result<Self> {
        if (0..MAX_SUB_WALLETS as i64).contains(&index) {
            Ok(Self(index as u8))
        } else {
            Err(Error::SlotOutOfRange(index))
        }
    }

    /// Get inner value
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// Whether this is the master slot
    pub const fn is_main(&self) -> bool {
        self.0 == 0
    }

    /// All slots in ascending order
    pub fn all() -> impl Iterator<Item = SlotIndex> + Clone {
        (0..MAX_SUB_WALLETS as u8).map(SlotIndex)
    }
}

impl TryFrom<i64> for SlotIndex {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        SlotIndex::new(value)
    }
}

impl From<SlotIndex> for u8 {
    fn from(value: SlotIndex) -> Self {
        value.0
    }
}

impl std::fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of looking for a free slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotAvailability {
    /// Lowest unused slot
    Available(SlotIndex),
    /// All 20 slots are in use
    Full,
}

impl SlotAvailability {
    /// Whether no slot is free
    pub fn is_full(&self) -> bool {
        matches!(self, SlotAvailability::Full)
    }

    /// The free slot, if any
    pub fn into_option(self) -> Option<SlotIndex> {
        match self {
            SlotAvailability::Available(slot) => Some(slot),
            SlotAvailability::Full => None,
        }
    }
}

/// Find the lowest slot not present in `used`.
///
/// Values outside 0..=19 occupy no slot and are ignored.
pub fn next_available(used: impl IntoIterator<Item = u8>) -> SlotAvailability {
    let used: BTreeSet<u8> = used.into_iter().collect();

    match SlotIndex::all().find(|slot| !used.contains(&slot.as_u8())) {
        Some(slot) => SlotAvailability::Available(slot),
        None => {
            tracing::debug!("All {} sub-wallet slots in use", MAX_SUB_WALLETS);
            SlotAvailability::Full
        }
    }
}
