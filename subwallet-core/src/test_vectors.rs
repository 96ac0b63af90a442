//! Known phrases shared by the integration tests

/// Zero entropy, 12 words
pub const ABANDON_ABOUT: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

/// All-ones entropy, 12 words; the 11th word is the last wordlist entry
pub const ZOO_WRONG: &str = "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo wrong";

/// 0x7f repeated, 12 words
pub const LEGAL_YELLOW: &str = "legal winner thank year wave sausage worth useful legal winner thank yellow";

/// 0x80 repeated, 12 words
pub const LETTER_ABOVE: &str = "letter advice cage absurd amount doctor acoustic avoid letter advice cage above";

/// Zero entropy, 24 words
pub const ABANDON_ART_24: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon art";

/// Twelve valid words with a failing checksum
pub const ALL_ABANDON: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon";
