//! Core types and definitions for the IRONCLASH battle simulator.
//!
//! This crate defines the vocabulary shared across all other crates:
//! vehicles, combatants, input, snapshots, events, outcomes, errors and constants.
//! It has no dependency on any runtime, renderer or random source.

pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod input;
pub mod outcome;
pub mod state;
pub mod types;
pub mod vehicle;

pub use error::{IronclashError, Result};
