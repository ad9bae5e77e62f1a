//! Error types shared by every IRONCLASH crate.

use thiserror::Error;

use crate::enums::Difficulty;

/// Result type alias using [`IronclashError`].
pub type Result<T> = std::result::Result<T, IronclashError>;

/// Top-level error type. Every variant is terminal to the operation that raised it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IronclashError {
    /// Requested catalog id does not exist.
    #[error("Unknown vehicle archetype: {0}")]
    UnknownArchetype(String),

    /// A custom catalog listed the same id twice.
    #[error("Duplicate vehicle archetype: {0}")]
    DuplicateArchetype(String),

    /// No catalog archetype falls inside the requested tier window.
    #[error("No {difficulty} opponents available in tiers {min_tier}..={max_tier}")]
    EmptyPool {
        /// Difficulty the window was derived from.
        difficulty: Difficulty,
        /// Lowest eligible tier.
        min_tier: u32,
        /// Highest eligible tier.
        max_tier: u32,
    },

    /// Opponent count below zero.
    #[error("Invalid opponent count: {0}")]
    InvalidOpponentCount(i64),

    /// Tier outside the supported range.
    #[error("Invalid tier: {0}")]
    InvalidTier(i64),

    /// Difficulty label other than easy, medium or hard.
    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    /// A battle needs at least one opponent.
    #[error("Cannot start a battle without opponents")]
    EmptyRoster,

    /// Host configuration could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}
