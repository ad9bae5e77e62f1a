//! Battle simulation engine for IRONCLASH.
//!
//! Owns the authoritative battle state, runs systems at a fixed step,
//! and produces BattleSnapshots for the render sink.

pub mod battle;
pub mod engine;
pub mod setup;
pub mod systems;

pub use battle::BattleState;
pub use engine::{BattleSimulator, SimConfig};
pub use ironclash_core as core;
