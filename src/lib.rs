//! Rock Paper Scissors against a uniform random opponent.
//!
//! The crate is split along the seams of a single game session:
//! - [`gameplay`] holds the closed move set and the outcome rule
//! - [`opponent`] supplies the computer's moves
//! - [`session`] keeps score and history for one player
//!
//! Presentation (prompting, rendering) lives behind the `cli` feature.

pub mod gameplay;
pub mod opponent;
pub mod session;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod players;

pub use gameplay::*;
pub use opponent::*;
pub use session::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Win rates and sampling frequencies, expressed in percent.
pub type Probability = f32;
/// Games played, won, lost or tied within a session.
pub type Count = usize;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and opponent sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// SESSION DISPLAY
// ============================================================================
/// Number of most recent games shown in the history table.
pub const HISTORY_DISPLAY_LIMIT: usize = 10;
/// Decimal places used when rendering the win rate.
pub const WIN_RATE_PRECISION: usize = 1;
/// Time-of-day format for history timestamps.
pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S";
/// One-line summary of the beats relation.
pub const RULES: &str = "🪨 Rock crushes Scissors | 📄 Paper covers Rock | ✂️ Scissors cut Paper";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at the given level.
/// Location, target and thread columns are suppressed to keep game output readable.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}
