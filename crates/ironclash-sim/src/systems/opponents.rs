//! Opponent system — runs each living opponent's FSM, then its gun.
//!
//! Calls the FSM from ironclash-ai for movement and state changes, then rolls
//! the per-step fire chance for loaded guns.

use rand::Rng;

use ironclash_core::components::Projectile;
use ironclash_core::constants::{OPPONENT_FIRE_CHANCE, OPPONENT_MUZZLE_OFFSET, OPPONENT_SHELL_SPEED};
use ironclash_core::enums::Side;
use ironclash_core::events::BattleEvent;
use ironclash_core::types::{Position, Velocity};

use ironclash_ai::fsm;

use crate::battle::BattleState;

/// Update opponents in roster order. Dead opponents are skipped entirely.
pub fn run<R: Rng + ?Sized>(state: &mut BattleState, rng: &mut R, events: &mut Vec<BattleEvent>) {
    let target = state.player.position;
    let step = state.time.step;

    for (index, opponent) in state.opponents.iter_mut().enumerate() {
        if !opponent.is_alive() {
            continue;
        }

        let health_ratio = opponent.health_ratio();
        if let Some(engine) = opponent.ai.as_mut() {
            let update = fsm::update(
                engine,
                &mut opponent.position,
                health_ratio,
                target,
                step,
                rng,
            );
            if update.state_changed() {
                tracing::debug!(
                    step,
                    opponent = index,
                    from = %update.previous_state,
                    to = %update.new_state,
                    "Opponent changed behavior"
                );
                events.push(BattleEvent::AiStateChanged {
                    opponent: index,
                    from: update.previous_state,
                    to: update.new_state,
                });
            }
        }

        if opponent.reload > 0 {
            opponent.reload -= 1;
        } else if rng.gen::<f64>() < OPPONENT_FIRE_CHANCE {
            let muzzle = opponent.position - Position::new(OPPONENT_MUZZLE_OFFSET, 0.0);
            state.projectiles.push(Projectile {
                position: muzzle,
                velocity: Velocity::new(-OPPONENT_SHELL_SPEED, 0.0),
                damage: opponent.vehicle.stats.damage,
                owner: Side::Opponent,
            });
            opponent.reload = opponent.vehicle.stats.reload_steps;
            events.push(BattleEvent::ShotFired {
                side: Side::Opponent,
                position: muzzle,
            });
        }
    }
}
