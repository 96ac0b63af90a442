//! Sub-wallet engine parameters and policy types
//!
//! This crate provides the fixed constants of the mnemonic encoding, the
//! word-count policies used by the validator, and the engine configuration
//! shared by the core library and the operator tooling.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod limits;
pub mod policy;

pub use config::EngineConfig;
pub use limits::*;
pub use policy::{WordCountPolicy, WordCountStatus};

/// Error types for parameter operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration could not be parsed
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for parameter operations
pub type Result<T> = std::result::Result<T, Error>;
