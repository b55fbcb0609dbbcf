//! Monte Carlo equity engine for Texas Hold'em.
//!
//! Deck modeling and hand evaluation live in [`cards`], trial simulation and
//! aggregation in [`equity`], shorthand range expansion in [`ranges`], and the
//! serialized request/response contract in [`dto`].
pub mod cards;
pub mod dto;
pub mod equity;
pub mod error;
pub mod ranges;

pub use error::EquityError;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Win and tie shares, reported on a 0-100 scale.
pub type Percent = f64;
/// Raw win/tie/trial counters.
pub type Count = u64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// SIMULATION PARAMETERS
// ============================================================================
/// Trials per request when the caller does not say otherwise.
pub const DEFAULT_TRIALS: usize = 1000;
/// Trials per concrete pairing in range-vs-range comparisons.
pub const RANGE_TRIALS: usize = 100;
/// Trials handed to each rayon task. Fixed so seeded runs do not depend on scheduling.
pub const BATCH_SIZE: usize = 1024;
/// Ceiling on total simulated trials for one call (pairings x trials-per-pairing).
pub const TRIAL_BUDGET: usize = 50_000_000;

// ============================================================================
// TABLE LIMITS
// ============================================================================
/// Fewest hands that make a contest.
pub const MIN_PLAYERS: usize = 2;
/// Most hands at one table. 10 x 2 + 5 = 25 cards never exhausts the deck.
pub const MAX_PLAYERS: usize = 10;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Environment variable selecting the terminal log level.
pub const LOG_LEVEL_VAR: &str = "POKERPAL_LOG";

/// Initialize terminal logging on stderr so stdout stays machine-readable.
/// The level comes from `POKERPAL_LOG`, falling back to `default`.
#[cfg(feature = "cli")]
pub fn log(default: log::LevelFilter) {
    let level = std::env::var(LOG_LEVEL_VAR)
        .ok()
        .and_then(|s| s.parse::<log::LevelFilter>().ok())
        .unwrap_or(default);
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term]).expect("initialize logger");
}
