//! Collision system: removes shells that left the arena or struck a vehicle.
//!
//! Shells are checked in firing order. A player shell hits the first living
//! opponent in roster order whose hit box contains it, not the closest one.

use ironclash_core::components::Combatant;
use ironclash_core::constants::{ARENA_BOUNDS, HIT_HALF_HEIGHT, HIT_HALF_WIDTH};
use ironclash_core::enums::Side;
use ironclash_core::events::BattleEvent;
use ironclash_core::types::Position;

use crate::battle::BattleState;

/// Resolve every live projectile against the arena bounds and the combatants.
pub fn run(state: &mut BattleState, events: &mut Vec<BattleEvent>) {
    let step = state.time.step;
    let BattleState {
        player,
        opponents,
        projectiles,
        ..
    } = state;

    projectiles.retain(|shell| {
        if !ARENA_BOUNDS.contains(shell.position) {
            return false;
        }

        match shell.owner {
            Side::Opponent => {
                if player.is_alive() && in_hit_box(shell.position, player.position) {
                    strike(player, None, shell.damage, step, events);
                    return false;
                }
            }
            Side::Player => {
                let target = opponents
                    .iter_mut()
                    .enumerate()
                    .find(|(_, o)| o.is_alive() && in_hit_box(shell.position, o.position));
                if let Some((index, opponent)) = target {
                    strike(opponent, Some(index), shell.damage, step, events);
                    return false;
                }
            }
        }

        true
    });
}

/// Axis-aligned hit box test around a vehicle's center.
pub fn in_hit_box(shell: Position, vehicle: Position) -> bool {
    (shell.x - vehicle.x).abs() < HIT_HALF_WIDTH && (shell.y - vehicle.y).abs() < HIT_HALF_HEIGHT
}

fn strike(
    victim: &mut Combatant,
    opponent: Option<usize>,
    damage: u32,
    step: u64,
    events: &mut Vec<BattleEvent>,
) {
    let killed = victim.apply_damage(damage);
    tracing::debug!(
        step,
        victim = %victim.vehicle.name,
        ?opponent,
        damage,
        remaining = victim.health,
        "Shell hit"
    );
    events.push(BattleEvent::Hit {
        opponent,
        damage,
        remaining_health: victim.health,
    });
    if killed {
        tracing::debug!(step, victim = %victim.vehicle.name, ?opponent, "Vehicle destroyed");
        events.push(BattleEvent::Destroyed { opponent });
    }
}
