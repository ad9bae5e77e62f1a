//! Opponent AI for IRONCLASH.
//!
//! Implements the patrol / attack / retreat state machine that drives every
//! computer-controlled vehicle, and the difficulty-driven behavior profiles.

pub mod fsm;
pub mod profiles;

pub use ironclash_core as core;
