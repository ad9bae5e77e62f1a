//! Systems that advance the battle state each step.
//!
//! Systems are free functions over `&mut BattleState` (or `&BattleState` for
//! read-only). They do not own state; everything lives in the battle state.

pub mod collision;
pub mod movement;
pub mod opponents;
pub mod player;
pub mod snapshot;
pub mod termination;
