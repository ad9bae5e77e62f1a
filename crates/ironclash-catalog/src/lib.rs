//! Vehicle catalog and opponent roster generation for IRONCLASH.
//!
//! The catalog is the read-only registry of vehicle archetypes. The generator
//! draws opponent rosters from it for a given player tier and difficulty.

pub mod catalog;
pub mod generator;

pub use catalog::VehicleCatalog;
pub use ironclash_core as core;

#[cfg(test)]
mod tests;
