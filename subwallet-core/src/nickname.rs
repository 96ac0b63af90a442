//! Display names for wallets and sub-wallets

use crate::slots::SlotIndex;

/// Display name of a slot: "Main Wallet" for slot 0, "Sub-Wallet N" otherwise
pub fn slot_nickname(slot: SlotIndex) -> String {
    if slot.is_main() {
        "Main Wallet".to_string()
    } else {
        format!("Sub-Wallet {}", slot)
    }
}

/// Display name of the K-th independent master key
pub fn master_nickname(count: usize) -> String {
    format!("Wallet {}", count)
}
