//! Snapshot system: builds a complete BattleSnapshot from the battle state.
//!
//! This system is read-only — it never modifies the state.

use ironclash_core::components::{Combatant, Projectile};
use ironclash_core::events::BattleEvent;
use ironclash_core::state::{BattleSnapshot, CombatantView, ProjectileView};

use crate::battle::BattleState;

/// Build a complete BattleSnapshot from the current battle state.
pub fn build_snapshot(state: &BattleState, events: Vec<BattleEvent>) -> BattleSnapshot {
    BattleSnapshot {
        time: state.time,
        player: build_combatant(&state.player),
        opponents: state.opponents.iter().map(build_combatant).collect(),
        projectiles: state.projectiles.iter().map(build_projectile).collect(),
        opponents_remaining: state.opponents_remaining(),
        outcome: state.outcome,
        events,
    }
}

fn build_combatant(combatant: &Combatant) -> CombatantView {
    CombatantView {
        name: combatant.vehicle.name.clone(),
        side: combatant.side,
        position: combatant.position,
        health: combatant.health,
        max_health: combatant.max_health(),
        reload: combatant.reload,
        ai_state: combatant.ai.as_ref().map(|ai| ai.state),
    }
}

fn build_projectile(shell: &Projectile) -> ProjectileView {
    ProjectileView {
        position: shell.position,
        velocity: shell.velocity,
        owner: shell.owner,
    }
}
