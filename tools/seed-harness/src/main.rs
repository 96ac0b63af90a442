//! CLI harness for the sub-wallet engine
//!
//! Exercises the public surface from a terminal:
//! - Phrase generation and import validation
//! - Sub-wallet derivation for one slot or all 20
//! - Slot allocation and duplicate detection

use anyhow::Context;
use clap::{Parser, Subcommand};
use subwallet_core::{
    derive_sub_wallet_mnemonic, generate_mnemonic, get_next_available_index,
    validate_mnemonic_for_import, DuplicateDetector, Phrase, SlotAvailability, SubWalletDeriver,
};
use subwallet_params::EngineConfig;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "seed-harness")]
#[command(about = "Sub-wallet mnemonic engine harness", long_about = None)]
struct Cli {
    /// JSON engine config (defaults apply when omitted)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a fresh 12-word master phrase
    Generate,

    /// Validate a phrase as an import would
    Validate {
        /// Phrase text (quote it)
        phrase: String,
    },

    /// Derive sub-wallet phrases
    Derive {
        /// Master phrase text (quote it)
        phrase: String,

        /// Slot index (0..=19)
        #[arg(
            short,
            long,
            default_value = "0",
            allow_negative_numbers = true,
            conflicts_with = "all"
        )]
        slot: i64,

        /// Derive all 20 slots
        #[arg(short, long)]
        all: bool,
    },

    /// Lowest free slot given the used ones
    NextSlot {
        /// Used slot indices
        used: Vec<u8>,
    },

    /// Check whether a phrase duplicates any existing one
    Duplicate {
        /// Candidate phrase
        candidate: String,

        /// Existing phrases
        existing: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::load(path).with_context(|| format!("loading config {}", path))?,
        None => EngineConfig::default(),
    };

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .init();

    match cli.command {
        Commands::Generate => run_generate()?,
        Commands::Validate { phrase } => run_validate(&phrase)?,
        Commands::Derive { phrase, slot, all } => run_derive(&config, &phrase, slot, all)?,
        Commands::NextSlot { used } => run_next_slot(used),
        Commands::Duplicate {
            candidate,
            existing,
        } => run_duplicate(&config, &candidate, &existing),
    }

    Ok(())
}

fn run_generate() -> anyhow::Result<()> {
    let phrase = generate_mnemonic()?;
    info!("Generated {}-word master phrase", phrase.word_count());
    println!("{}", phrase.as_str());
    Ok(())
}

fn run_validate(phrase: &str) -> anyhow::Result<()> {
    let report = validate_mnemonic_for_import(phrase);
    println!("{}", serde_json::to_string_pretty(&report)?);

    if let Some(error) = &report.error {
        warn!("Rejected phrase ({}): {}", error.category(), error);
        anyhow::bail!(error.user_message());
    }
    Ok(())
}

fn run_derive(config: &EngineConfig, phrase: &str, slot: i64, all: bool) -> anyhow::Result<()> {
    if !all {
        let derived = derive_sub_wallet_mnemonic(phrase, slot)?;
        println!("{}", derived);
        return Ok(());
    }

    let master = Phrase::parse_sub_wallet(phrase)?;
    let deriver = SubWalletDeriver::new(config.parallel_derivation);
    for wallet in deriver.derive_all(&master)? {
        println!("{:>2}  {:<14} {}", wallet.slot, wallet.nickname, wallet.phrase.as_str());
    }
    Ok(())
}

fn run_next_slot(used: Vec<u8>) {
    match get_next_available_index(used) {
        SlotAvailability::Available(slot) => println!("{}", slot),
        SlotAvailability::Full => println!("full"),
    }
}

fn run_duplicate(config: &EngineConfig, candidate: &str, existing: &[String]) {
    let duplicate = DuplicateDetector::from_config(config).is_duplicate(candidate, existing);
    info!("Checked candidate against {} existing phrases", existing.len());
    println!("{}", duplicate);
}
