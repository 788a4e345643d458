//! Free-text poker hand notation.
//!
//! Reads what a player types into a hand-input box ("aks", "Q Q", "10k",
//! "AhKh") and normalizes it into canonical starting-hand notation.
//!
//! ## Core Types
//!
//! - [`Rank`]: A card face value, Two through Ace
//! - [`Suitedness`]: The `s` / `o` suffix of a non-pair hand
//! - [`Notation`]: A canonical starting hand: "AA", "AKs", "87o"
//! - [`Parse`]: The outcome of reading one snapshot of input
//!
//! ## Entry Points
//!
//! - [`parse`]: free text to [`Parse`], never panics
//! - [`display`]: canonical text to a label, "AKs" to "Ace-King suited"
//!
//! Two distinct ranks without a suffix parse as
//! [`Parse::NeedsSuitedness`]; the caller asks the player and resubmits
//! with [`Parse::resolve`].
pub mod cards;
pub mod notation;

#[cfg(feature = "server")]
pub mod cli;
#[cfg(feature = "client")]
pub mod wasm;

pub use cards::*;
pub use notation::*;

// ============================================================================
// PARSER CONFIGURATION
// ============================================================================
/// Rank symbols in ascending order.
pub const RANKS: &str = "23456789TJQKA";
/// Appended to messages about unreadable ranks.
pub const RANKS_HINT: &str = const_format::concatcp!("ranks are ", RANKS, " and 10 reads as T");
/// Fixed prompt carried by every `NeedsSuitedness` outcome.
pub const SUITEDNESS_PROMPT: &str =
    "suited or offsuit? add 's' if both cards share a suit, 'o' if they do not";
/// Upper bound on suggestions attached to an `Invalid` outcome.
pub const MAX_SUGGESTIONS: usize = 3;
/// Largest edit distance at which a catalogue hand is still suggested.
pub const MAX_SUGGESTION_DISTANCE: usize = 2;
/// Longer input is too far gone for edit-distance suggestions.
pub const MAX_SUGGESTION_INPUT: usize = 8;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
