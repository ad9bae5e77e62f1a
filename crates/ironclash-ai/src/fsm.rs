//! Opponent behavior finite state machine.
//!
//! Two tiers: a sticky decision tick that re-evaluates the state every
//! [`AI_DECISION_INTERVAL_STEPS`], and a continuous behavior that moves the
//! vehicle every step according to the current state. Random draws come from
//! the caller's generator so tests can script them.

use std::f64::consts::TAU;

use rand::Rng;

use ironclash_core::components::DecisionEngine;
use ironclash_core::constants::{AI_DECISION_INTERVAL_STEPS, OPPONENT_ZONE};
use ironclash_core::enums::AiState;
use ironclash_core::types::{heading_to, unit_from_heading, Position};

use crate::profiles::{get_profile, BehaviorProfile};

/// Input to the decision tick for a single opponent.
pub struct DecisionContext {
    pub position: Position,
    pub target: Position,
    /// Current health over max health.
    pub health_ratio: f64,
}

/// Output from one FSM update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionUpdate {
    pub previous_state: AiState,
    pub new_state: AiState,
    /// True when a decision tick ran this step.
    pub decided: bool,
}

impl DecisionUpdate {
    pub fn state_changed(&self) -> bool {
        self.previous_state != self.new_state
    }
}

/// The decision-tick transition. Conditions are evaluated in order and each
/// random draw is only taken when its branch is reached.
pub fn evaluate<R: Rng + ?Sized>(
    ctx: &DecisionContext,
    profile: &BehaviorProfile,
    rng: &mut R,
) -> AiState {
    let distance = ctx.position.distance(ctx.target);

    if ctx.health_ratio < profile.retreat_health_ratio && rng.gen::<f64>() > profile.aggression {
        AiState::Retreat
    } else if distance < profile.engage_range || rng.gen::<f64>() < profile.aggression {
        AiState::Attack
    } else {
        AiState::Patrol
    }
}

/// Run one step of the FSM for an opponent: maybe decide, then move.
pub fn update<R: Rng + ?Sized>(
    engine: &mut DecisionEngine,
    position: &mut Position,
    health_ratio: f64,
    target: Position,
    step: u64,
    rng: &mut R,
) -> DecisionUpdate {
    let profile = get_profile(engine.difficulty);
    let previous_state = engine.state;

    let decided = step.saturating_sub(engine.last_decision_step) > AI_DECISION_INTERVAL_STEPS;
    if decided {
        let ctx = DecisionContext {
            position: *position,
            target,
            health_ratio,
        };
        engine.state = evaluate(&ctx, &profile, rng);
        engine.last_decision_step = step;
    }

    match engine.state {
        AiState::Patrol => {
            let (next, heading) = patrol(*position, engine.heading, &profile, rng);
            *position = next;
            engine.heading = heading;
        }
        AiState::Attack => *position = attack(*position, target, &profile),
        AiState::Retreat => *position = retreat(*position, target, &profile),
    }

    DecisionUpdate {
        previous_state,
        new_state: engine.state,
        decided,
    }
}

/// Wander along a heading that occasionally changes, staying in the opponent zone.
pub fn patrol<R: Rng + ?Sized>(
    position: Position,
    heading: f64,
    profile: &BehaviorProfile,
    rng: &mut R,
) -> (Position, f64) {
    let heading = if rng.gen::<f64>() < profile.patrol_turn_chance {
        rng.gen::<f64>() * TAU
    } else {
        heading
    };
    let moved = position + unit_from_heading(heading) * profile.patrol_speed;
    (OPPONENT_ZONE.clamp(moved), heading)
}

/// Close on the target, easing off inside the standoff range. Not clamped.
pub fn attack(position: Position, target: Position, profile: &BehaviorProfile) -> Position {
    let direction = unit_from_heading(heading_to(position, target));
    let mut moved = position + direction * profile.attack_speed;
    if moved.distance(target) < profile.standoff_range {
        moved -= direction * profile.attack_backoff;
    }
    moved
}

/// Back straight away from the target, staying in the opponent zone.
pub fn retreat(position: Position, target: Position, profile: &BehaviorProfile) -> Position {
    let direction = unit_from_heading(heading_to(position, target));
    OPPONENT_ZONE.clamp(position - direction * profile.retreat_speed)
}
