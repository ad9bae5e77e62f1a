//! Termination system: decides whether the battle is over.
//!
//! Checks run in a fixed order, so a player who dies in the same step as the
//! last opponent still loses.

use ironclash_core::constants::BATTLE_TIME_LIMIT_STEPS;
use ironclash_core::events::BattleEvent;
use ironclash_core::outcome::Outcome;

use crate::battle::BattleState;

/// Outcome for the current state, if any. Read-only.
pub fn evaluate(state: &BattleState) -> Option<Outcome> {
    let step = state.time.step;
    if !state.player.is_alive() {
        Some(Outcome::defeat(step))
    } else if state.opponents.iter().all(|o| !o.is_alive()) {
        Some(Outcome::victory(step))
    } else if step > BATTLE_TIME_LIMIT_STEPS {
        Some(Outcome::timeout(step))
    } else {
        None
    }
}

/// Record the outcome on the state when the battle has ended.
pub fn run(state: &mut BattleState, events: &mut Vec<BattleEvent>) -> Option<Outcome> {
    let outcome = evaluate(state)?;
    state.outcome = Some(outcome);
    events.push(BattleEvent::BattleEnded { kind: outcome.kind });
    tracing::info!(
        step = outcome.step,
        kind = ?outcome.kind,
        experience = outcome.experience,
        credits = outcome.credits,
        "Battle ended"
    );
    Some(outcome)
}
