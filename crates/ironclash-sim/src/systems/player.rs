//! Player control system: applies held input to the player's vehicle.

use ironclash_core::components::Projectile;
use ironclash_core::constants::{PLAYER_BOUNDS, PLAYER_MUZZLE_OFFSET, PLAYER_SHELL_SPEED};
use ironclash_core::enums::Side;
use ironclash_core::events::BattleEvent;
use ironclash_core::input::InputState;
use ironclash_core::types::{Position, Velocity};

use crate::battle::BattleState;

/// Move the player, then fire if loaded and the trigger is held. A dead player does nothing.
pub fn run(state: &mut BattleState, input: &InputState, events: &mut Vec<BattleEvent>) {
    let player = &mut state.player;
    if !player.is_alive() {
        return;
    }

    player.position = PLAYER_BOUNDS.clamp(player.position + input.movement());

    if player.reload > 0 {
        player.reload -= 1;
    } else if input.fire {
        let muzzle = player.position + Position::new(PLAYER_MUZZLE_OFFSET, 0.0);
        state.projectiles.push(Projectile {
            position: muzzle,
            velocity: Velocity::new(PLAYER_SHELL_SPEED, 0.0),
            damage: player.vehicle.stats.damage,
            owner: Side::Player,
        });
        player.reload = player.vehicle.stats.reload_steps;
        events.push(BattleEvent::ShotFired {
            side: Side::Player,
            position: muzzle,
        });
    }
}
