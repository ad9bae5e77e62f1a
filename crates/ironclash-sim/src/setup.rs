//! Combatant factories for setting up a battle.
//!
//! The player starts on the west side; opponents line up in a column on the east.

use ironclash_core::components::Combatant;
use ironclash_core::constants::*;
use ironclash_core::enums::Difficulty;
use ironclash_core::error::{IronclashError, Result};
use ironclash_core::types::{Position, SimTime};
use ironclash_core::vehicle::VehicleInstance;

use crate::battle::BattleState;

/// Build a fresh battle. Fails with `EmptyRoster` when there is nobody to fight.
pub fn setup_battle(
    player: VehicleInstance,
    opponents: Vec<VehicleInstance>,
    difficulty: Difficulty,
) -> Result<BattleState> {
    if opponents.is_empty() {
        return Err(IronclashError::EmptyRoster);
    }

    let opponents = opponents
        .into_iter()
        .enumerate()
        .map(|(index, vehicle)| spawn_opponent(vehicle, index, difficulty))
        .collect();

    Ok(BattleState {
        time: SimTime::default(),
        player: spawn_player(player),
        opponents,
        projectiles: Vec::new(),
        outcome: None,
    })
}

/// Spawn the player's vehicle at its start position.
pub fn spawn_player(vehicle: VehicleInstance) -> Combatant {
    Combatant::player(vehicle, PLAYER_SPAWN)
}

/// Spawn the roster's `index`-th opponent.
pub fn spawn_opponent(vehicle: VehicleInstance, index: usize, difficulty: Difficulty) -> Combatant {
    Combatant::opponent(vehicle, opponent_spawn(index), difficulty)
}

pub fn opponent_spawn(index: usize) -> Position {
    Position::new(
        OPPONENT_SPAWN_X,
        OPPONENT_SPAWN_Y + index as f64 * OPPONENT_SPAWN_SPACING,
    )
}
