//! Player progression between battles.
//!
//! The simulator only ever hands over an `Outcome`. This crate turns it into a
//! reward and owns everything that persists across battles: experience,
//! credits, and the garage of unlocked vehicles.

pub mod progression;
pub mod rewards;

pub use ironclash_core as core;
pub use progression::{GarageSlot, PlayerProgression, ProgressionStore};
pub use rewards::{reward_for, RewardDelta};

#[cfg(test)]
mod tests;
