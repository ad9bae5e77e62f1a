//! IRONCLASH headless host.
//!
//! This crate wires the catalog, simulator and progression together and drives
//! a battle from the command line with a scripted driver and log output.

pub mod autopilot;
pub mod config;
pub mod game_loop;
pub mod render;
pub mod session;

pub use ironclash_core as core;
